use clf_dashboard::error::DashboardError;

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    clf_dashboard::app::run().await
}
