use tracing::{error, info};
use vpn_service_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting VPN service admin walkthrough");

    // Create client - configuration comes from the environment
    let client = VpnServiceClient::default();
    info!("  Base URL: {}", client.config().rest_api.base_url);

    // Check service health
    let health = client.health_check().await?;
    info!("Health check: {}", serde_json::to_string_pretty(&health)?);

    // Create a user with a 10 GB allowance for 30 days
    info!("Creating user...");
    let created = client
        .create_user(
            "test_rust_user",
            "rust123",
            Some(10 * 1024 * 1024 * 1024),
            Some(30),
        )
        .await?;
    info!("{}", serde_json::to_string_pretty(&created)?);

    if !created.is_success() {
        error!("❌ User creation failed: {:?}", created.error);
        return Ok(());
    }

    if let Some(user) = created.into_data() {
        // Fetch the connection bundle
        info!("Getting config for user {}...", user.id);
        let config = client.get_user_config(user.id).await?;
        if let Some(bundle) = config.data() {
            info!("Connection URI: {}", bundle.uri);
        }

        // Double the traffic allowance
        info!("Updating user {}...", user.id);
        let update = UpdateUserRequest {
            traffic_limit: Some(20 * 1024 * 1024 * 1024),
            ..Default::default()
        };
        let updated = client.update_user(user.id, &update).await?;
        info!("{}", serde_json::to_string_pretty(&updated)?);

        // Service statistics
        let stats = client.get_stats().await?;
        info!("Service stats: {}", serde_json::to_string_pretty(&stats)?);

        // Uncomment to remove the demo user again
        // let deleted = client.delete_user(user.id).await?;
        // info!("Deleted: {}", deleted);
    }

    Ok(())
}
