pub use invite_confirm::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    invite_confirm::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
