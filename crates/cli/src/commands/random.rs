//! Show a random quote, optionally from one category.

use shared::api::QuoteQuery;

use crate::{api::Api, config::Config, ui};

pub async fn run(
    config: &Config,
    category: Option<i32>,
    lang: Option<String>,
) -> anyhow::Result<()> {
    let api = Api::new(config.api_url.clone());
    let query = QuoteQuery {
        category_id: category,
        lang,
    };

    let quote = ui::spin("Fetching...", api.random(&query)).await?;
    ui::print_quote(&quote);

    Ok(())
}
