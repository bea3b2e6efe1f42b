//! Show one quote by id.

use shared::api::LangQuery;

use crate::{api::Api, config::Config, ui};

pub async fn run(config: &Config, id: i32, lang: Option<String>) -> anyhow::Result<()> {
    let api = Api::new(config.api_url.clone());

    let quote = ui::spin("Fetching...", api.get_quote(id, &LangQuery { lang })).await?;
    ui::print_quote(&quote);

    Ok(())
}
