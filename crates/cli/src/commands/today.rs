//! Show the quote of the day.
//!
//! The first call of the day returns the quote every visitor sees today.
//! Later calls return random quotes.

use shared::api::QuoteQuery;

use crate::{api::Api, config::Config, ui};

pub async fn run(config: &Config, lang: Option<String>) -> anyhow::Result<()> {
    let api = Api::new(config.api_url.clone());
    let query = QuoteQuery {
        category_id: None,
        lang,
    };

    let quote = ui::spin("Fetching quote of the day...", api.today(&query)).await?;
    ui::print_quote(&quote);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::api::QuoteResponse;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[tokio::test]
    async fn fetches_translated_quote() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quotes/today"))
            .and(query_param("lang", "es"))
            .respond_with(ResponseTemplate::new(200).set_body_json(QuoteResponse {
                id: 3,
                text: "Hola".to_string(),
                author: "Anon".to_string(),
                category_id: 1,
            }))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            api_url: mock_server.uri(),
        };

        run(&config, Some("es".into())).await.unwrap();
    }

    #[tokio::test]
    async fn reports_empty_database() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quotes/today"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"error": "No quote found"}"#),
            )
            .mount(&mock_server)
            .await;

        let config = Config {
            api_url: mock_server.uri(),
        };

        let err = run(&config, None).await.unwrap_err();
        assert_eq!(err.to_string(), "No quote found");
    }
}
