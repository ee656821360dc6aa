#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    /// The endpoint answered with something other than `200 OK`.
    #[error("Error: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid completion response: {0}")]
    Response(String),
}
