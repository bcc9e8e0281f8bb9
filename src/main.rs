use bfhl::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    bfhl::app::run().await
}
