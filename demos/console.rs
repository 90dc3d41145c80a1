use ner_console_client::{ApiClient, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional: enable basic logging for the example
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // Reads NER_API_URL (and optionally NER_SESSION_FILE) from the environment
    let client = ApiClient::new(Config::from_env()?)?;

    let user = match client.auth().restore_session().await? {
        Some(user) => user,
        None => {
            let username = std::env::var("NER_USERNAME")?;
            let password = std::env::var("NER_PASSWORD")?;
            client.auth().sign_in(&username, &password).await?
        }
    };
    println!("signed in as {}", user.username);

    for project in client.projects().user_projects().await?.into_items() {
        let documents = client.documents().list(&project.slug, &[]).await?;
        println!("{} ({} documents)", project.name, documents.total());
    }
    Ok(())
}
