use pixeldrain::Config;

#[tokio::main]
async fn main() -> Result<(), pixeldrain::Error> {
    tracing_subscriber::fmt::init();

    let client = Config::from_env()?.build()?;

    let user = client.user().await?;
    println!(
        "{} ({}), {} bytes stored",
        user.username, user.subscription.name, user.storage_space_used
    );

    for file in client.user_files().await?.files {
        println!("{}\t{}\t{}", file.id, file.size, file.name);
    }

    Ok(())
}
