use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("At least one role name is required"))]
    EmptyRoleSet,

    #[snafu(display("Role name must not be blank"))]
    BlankRoleName,
}
