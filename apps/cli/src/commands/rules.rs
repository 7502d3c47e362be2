//! AI rule and profitability commands.

use baydesk_connect::BackofficeApiClient;
use baydesk_core::rules::NewAiRule;

use crate::cli::RulesCommands;
use crate::output::{self, fmt_opt};

pub async fn run(command: RulesCommands, client: &BackofficeApiClient) -> anyhow::Result<()> {
    match command {
        RulesCommands::List => {
            let rules = client.list_ai_rules().await?;

            let rows: Vec<Vec<String>> = rules
                .iter()
                .map(|rule| {
                    vec![
                        rule.id.clone(),
                        rule.name.clone(),
                        if rule.enabled { "on" } else { "off" }.to_string(),
                        rule.prompt.clone(),
                    ]
                })
                .collect();
            output::print_table(&["id", "name", "enabled", "prompt"], &rows);
            Ok(())
        }
        RulesCommands::Add { name, prompt } => {
            let rule = client.create_ai_rule(&NewAiRule { name, prompt }).await?;
            println!("created rule {} ({})", rule.name, rule.id);
            if let Some(sql) = &rule.sql {
                println!("{}", sql);
            }
            Ok(())
        }
        RulesCommands::Preview { prompt } => {
            let preview = client
                .preview_ai_rule(&NewAiRule {
                    name: "preview".to_string(),
                    prompt,
                })
                .await?;

            println!("{}", preview.sql);
            if let Some(count) = preview.row_count {
                println!("-- {} matching rows", count);
            }
            for row in &preview.sample_rows {
                println!("{}", serde_json::to_string(row)?);
            }
            Ok(())
        }
    }
}

pub async fn profit(client: &BackofficeApiClient) -> anyhow::Result<()> {
    let models = client.get_model_profits().await?;

    let rows: Vec<Vec<String>> = models
        .iter()
        .map(|m| {
            vec![
                m.model.clone(),
                m.units_sold.to_string(),
                m.revenue.to_string(),
                m.cost.to_string(),
                m.profit.to_string(),
                fmt_opt(&m.margin_pct.map(|p| format!("{}%", p))),
            ]
        })
        .collect();
    output::print_table(
        &["model", "units", "revenue", "cost", "profit", "margin"],
        &rows,
    );
    Ok(())
}
