/// Default base URL for the VPN service management API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default account lifetime in days when `create_user` is called without one
pub const DEFAULT_EXPIRY_DAYS: i64 = 30;
/// Traffic limit value the server interprets as unlimited
pub const UNLIMITED_TRAFFIC: i64 = 0;
/// User agent string used in HTTP requests to identify this client to the VPN service API
pub const USER_AGENT: &str = "vpn-service-client/0.3.0";
