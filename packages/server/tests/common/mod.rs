// Shared test harness: spawns the app on an ephemeral port with an
// injected mailer and returns its base URL.

use std::sync::Arc;
use std::time::Duration;

use hommage_core::domains::notifications::{NotificationRelay, MAIL_TIMEOUT};
use hommage_core::kernel::{BaseMailer, ServerDeps};
use hommage_core::server::build_app;

pub const TEST_RECIPIENT: &str = "famille@example.org";

#[allow(dead_code)]
pub async fn spawn_app(mailer: Arc<dyn BaseMailer>) -> String {
    spawn_app_with(mailer, MAIL_TIMEOUT, false).await
}

#[allow(dead_code)]
pub async fn spawn_app_with(
    mailer: Arc<dyn BaseMailer>,
    bound: Duration,
    production: bool,
) -> String {
    let relay = NotificationRelay::new(mailer, TEST_RECIPIENT).with_bound(bound);
    let deps = ServerDeps::new(relay, production);
    let app = build_app(deps);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .await
        .expect("test server");
    });

    format!("http://{addr}")
}
