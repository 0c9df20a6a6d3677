use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use casdoor_admin_core::{config::ProviderConfig, model::{ApplicationId, RoleSet}};
use casdoor_admin_operator::{
    casdoor_client::{self, ApplicationApi, CasdoorApplication},
    command::{AddApplicationParams, ApplicationCommands, DeleteApplicationParams, Error, ErrorKind, Outcome},
    session::{self, authorize, ClaimRole, Claims, SessionGate},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    GetApplications(String),
    AddApplication(Box<CasdoorApplication>),
    DeleteApplication(ApplicationId),
}

/// Provider stand-in that records every request it receives.
#[derive(Clone, Default)]
struct RecordingApi {
    calls: Arc<Mutex<Vec<Call>>>,
    applications: Vec<CasdoorApplication>,
    reject_with: Option<String>,
}

impl RecordingApi {
    fn with_applications(applications: Vec<CasdoorApplication>) -> Self {
        Self { applications, ..Self::default() }
    }

    fn rejecting(message: &str) -> Self {
        Self { reject_with: Some(message.to_string()), ..Self::default() }
    }

    fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }

    fn record(&self, call: Call, action: &'static str) -> casdoor_client::Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.reject_with {
            Some(message) => Err(casdoor_client::Error::Rejected { action, message: message.clone() }),
            None => Ok(()),
        }
    }
}

impl ApplicationApi for RecordingApi {
    async fn get_applications(&self, owner: &str) -> casdoor_client::Result<Vec<CasdoorApplication>> {
        self.record(Call::GetApplications(owner.to_string()), "get-applications")?;
        Ok(self.applications.clone())
    }

    async fn add_application(&self, application: &CasdoorApplication) -> casdoor_client::Result<()> {
        self.record(Call::AddApplication(Box::new(application.clone())), "add-application")
    }

    async fn delete_application(&self, id: &ApplicationId) -> casdoor_client::Result<()> {
        self.record(Call::DeleteApplication(id.clone()), "delete-application")
    }
}

/// Gate that treats the operator as logged in with fixed roles.
struct StubGate {
    roles: Option<Vec<&'static str>>,
}

impl StubGate {
    const fn logged_out() -> Self { Self { roles: None } }

    const fn with_roles(roles: Vec<&'static str>) -> Self { Self { roles: Some(roles) } }
}

impl SessionGate for StubGate {
    fn check_logged_in_and_get_config(&self, required_roles: &RoleSet) -> session::Result<ProviderConfig> {
        let roles = self.roles.as_ref().ok_or(session::Error::NotLoggedIn)?;
        let claims = Claims {
            owner: "built-in".to_string(),
            name: "operator".to_string(),
            display_name: "Operator".to_string(),
            roles: roles
                .iter()
                .map(|name| ClaimRole { owner: "built-in".to_string(), name: (*name).to_string() })
                .collect(),
            exp: i64::MAX,
        };
        authorize(&claims, required_roles)?;
        Ok(provider_config())
    }
}

fn provider_config() -> ProviderConfig {
    ProviderConfig {
        endpoint: "http://casdoor.invalid".to_string(),
        client_id: "cli".to_string(),
        client_secret: "cli-secret".to_string(),
        certificate: String::new(),
        organization_name: "built-in".to_string(),
        application_name: "app-built-in".to_string(),
        verify_ssl: true,
    }
}

struct Harness {
    api: RecordingApi,
    connects: Arc<AtomicUsize>,
}

impl Harness {
    fn new(api: RecordingApi) -> Self { Self { api, connects: Arc::new(AtomicUsize::new(0)) } }

    fn commands(
        &self,
        gate: StubGate,
    ) -> ApplicationCommands<StubGate, impl Fn(&ProviderConfig) -> casdoor_client::Result<RecordingApi>>
    {
        let api = self.api.clone();
        let connects = Arc::clone(&self.connects);
        ApplicationCommands::new(gate, move |config: &ProviderConfig| {
            assert_eq!(config.client_id, "cli");
            let _ = connects.fetch_add(1, Ordering::SeqCst);
            Ok(api.clone())
        })
    }

    fn connects(&self) -> usize { self.connects.load(Ordering::SeqCst) }
}

fn administrator() -> StubGate { StubGate::with_roles(vec!["administrator"]) }

fn summary_source(name: &str, display_name: &str, client_id: &str) -> CasdoorApplication {
    CasdoorApplication {
        owner: "admin".to_string(),
        name: name.to_string(),
        display_name: display_name.to_string(),
        organization: "built-in".to_string(),
        client_id: client_id.to_string(),
        client_secret: "hidden".to_string(),
        description: format!("{name} description"),
        ..CasdoorApplication::default()
    }
}

#[tokio::test]
async fn test_add_with_required_flags_applies_defaults() {
    let harness = Harness::new(RecordingApi::default());
    let params = AddApplicationParams {
        name: "myapp".to_string(),
        client_id: "abc123".to_string(),
        client_secret: "secret1".to_string(),
        ..AddApplicationParams::default()
    };

    let outcome = harness.commands(administrator()).add(params).await.unwrap();
    assert_eq!(outcome, Outcome::Added { name: "myapp".to_string() });
    assert!(outcome.message().contains("myapp"));

    let calls = harness.api.calls();
    let [Call::AddApplication(request)] = calls.as_slice() else {
        panic!("expected exactly one add request, got {calls:?}");
    };
    assert_eq!(request.owner, "admin");
    assert_eq!(request.name, "myapp");
    assert_eq!(request.display_name, "myapp");
    assert_eq!(request.organization, "built-in");
    assert_eq!(request.description, "");
    assert_eq!(request.client_id, "abc123");
    assert_eq!(request.client_secret, "secret1");
    assert!(request.redirect_uris.is_empty());
    assert_eq!(request.token_format, "JWT");
    assert_eq!(request.expire_in_hours, 168);
    assert_eq!(request.refresh_expire_in_hours, 168);
    assert!(request.enable_password);
    assert!(!request.enable_sign_up);
    assert!(!request.enable_signin_session);
    assert!(!request.enable_code_signin);
    assert!(!request.enable_saml_compress);
    assert!(!request.enable_auto_signin);
    assert_eq!(request.cert, "cert-built-in");
    assert_eq!(request.grant_types, ["authorization_code", "implicit", "refresh_token"]);
    assert_eq!(request.response_types, ["code", "token", "id_token"]);
    assert_eq!(request.scopes, ["openid", "profile", "email"]);
}

#[tokio::test]
async fn test_add_merges_optional_flags() {
    let harness = Harness::new(RecordingApi::default());
    let params = AddApplicationParams {
        name: "dashboard".to_string(),
        client_id: "dash-id".to_string(),
        client_secret: "dash-secret".to_string(),
        redirect_uris: vec!["https://a.example/cb".to_string(), "https://b.example/cb".to_string()],
        organization: "acme".to_string(),
        description: "Internal dashboard".to_string(),
    };

    let _ = harness.commands(administrator()).add(params).await.unwrap();

    let calls = harness.api.calls();
    let [Call::AddApplication(request)] = calls.as_slice() else {
        panic!("expected exactly one add request, got {calls:?}");
    };
    assert_eq!(request.organization, "acme");
    assert_eq!(request.description, "Internal dashboard");
    assert_eq!(request.redirect_uris, ["https://a.example/cb", "https://b.example/cb"]);
    assert_eq!(request.owner, "admin");
    assert_eq!(request.token_format, "JWT");
}

#[tokio::test]
async fn test_add_with_only_name_never_reaches_provider() {
    let harness = Harness::new(RecordingApi::default());
    let params = AddApplicationParams { name: "myapp".to_string(), ..AddApplicationParams::default() };

    let err = harness.commands(administrator()).add(params).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let message = err.to_string();
    assert!(message.contains("--client-id"));
    assert!(message.contains("--client-secret"));
    assert!(!message.contains("--name"));

    assert!(harness.api.calls().is_empty());
    assert_eq!(harness.connects(), 0);
}

#[tokio::test]
async fn test_add_with_blank_fields_never_reaches_provider() {
    for (name, client_id, client_secret) in
        [("", "abc123", "secret1"), ("myapp", "   ", "secret1"), ("myapp", "abc123", "\t")]
    {
        let harness = Harness::new(RecordingApi::default());
        let params = AddApplicationParams {
            name: name.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            ..AddApplicationParams::default()
        };

        let err = harness.commands(administrator()).add(params).await.unwrap_err();
        assert!(matches!(err, Error::MissingFlags { ref flags } if flags.len() == 1));
        assert!(harness.api.calls().is_empty());
    }
}

#[tokio::test]
async fn test_add_surfaces_provider_rejection() {
    let harness = Harness::new(RecordingApi::rejecting("application already exists"));
    let params = AddApplicationParams {
        name: "myapp".to_string(),
        client_id: "abc123".to_string(),
        client_secret: "secret1".to_string(),
        ..AddApplicationParams::default()
    };

    let err = harness.commands(administrator()).add(params).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
    assert!(err.to_string().contains("application already exists"));
}

#[tokio::test]
async fn test_delete_sends_only_owner_and_name() {
    let harness = Harness::new(RecordingApi::default());

    let outcome = harness
        .commands(administrator())
        .delete(DeleteApplicationParams { name: "myapp".to_string() })
        .await
        .unwrap();
    assert_eq!(outcome.message(), "Application 'myapp' deleted successfully");

    assert_eq!(harness.api.calls(), [Call::DeleteApplication(ApplicationId::new("admin", "myapp"))]);
}

#[tokio::test]
async fn test_delete_with_blank_name_never_reaches_provider() {
    let harness = Harness::new(RecordingApi::default());

    let err = harness
        .commands(administrator())
        .delete(DeleteApplicationParams { name: "  ".to_string() })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(harness.api.calls().is_empty());
}

#[tokio::test]
async fn test_delete_missing_application_is_provider_error() {
    let harness = Harness::new(RecordingApi::rejecting("Unaffected"));

    let err = harness
        .commands(administrator())
        .delete(DeleteApplicationParams { name: "ghost".to_string() })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
}

#[tokio::test]
async fn test_list_empty() {
    let harness = Harness::new(RecordingApi::default());

    let outcome = harness.commands(administrator()).list().await.unwrap();
    assert_eq!(outcome, Outcome::Listed(Vec::new()));
    assert_eq!(harness.api.calls(), [Call::GetApplications("admin".to_string())]);
}

#[tokio::test]
async fn test_list_preserves_provider_order() {
    let harness = Harness::new(RecordingApi::with_applications(vec![
        summary_source("zeta", "Zeta", "id-z"),
        summary_source("alpha", "Alpha", "id-a"),
        summary_source("mid", "Mid", "id-m"),
    ]));

    let Outcome::Listed(applications) = harness.commands(administrator()).list().await.unwrap() else {
        panic!("expected a listing");
    };
    assert_eq!(
        applications.iter().map(|app| app.name.as_str()).collect::<Vec<_>>(),
        ["zeta", "alpha", "mid"]
    );
    assert_eq!(applications[1].display_name, "Alpha");
    assert_eq!(applications[1].client_id, "id-a");
    assert_eq!(applications[1].description, "alpha description");
}

#[tokio::test]
async fn test_viewer_is_forbidden_without_provider_call() {
    let harness = Harness::new(RecordingApi::default());

    let err = harness.commands(StubGate::with_roles(vec!["viewer"])).list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(harness.api.calls().is_empty());
    assert_eq!(harness.connects(), 0);
}

#[tokio::test]
async fn test_role_check_runs_before_flag_validation() {
    let harness = Harness::new(RecordingApi::default());

    let err = harness
        .commands(StubGate::with_roles(vec!["viewer"]))
        .add(AddApplicationParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_logged_out_is_not_authenticated() {
    let harness = Harness::new(RecordingApi::default());

    let err = harness
        .commands(StubGate::logged_out())
        .delete(DeleteApplicationParams { name: "myapp".to_string() })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAuthenticated);
    assert!(harness.api.calls().is_empty());
}
