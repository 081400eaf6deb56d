use agricare::{cli, config, error, image_input, render, report, submit};
use agricare::client::InferenceClient;
use agricare_common::{CaptureSource, InputMode, ReadingField, Workflow};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{AgriCareError, Result};
use std::path::Path;
use std::time::Duration;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(workflow: &mut Workflow, config: &Config) -> Result<()> {
    config.validate()?;
    let client = InferenceClient::new(Duration::from_secs(config.timeout_seconds))?;
    submit::submit(workflow, &client, &config.endpoints).await
}

/// 結果を保存し、結果が得られなかった場合はエラーにする
fn finish(workflow: &Workflow, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        report::Report::from_workflow(workflow)?.save(path)?;
        println!("\n✔ 結果を保存: {}", path.display());
    }

    match (workflow.outcome(), workflow.error()) {
        (None, Some(message)) => Err(AgriCareError::Submission(message.to_string())),
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Plant { image, output } => {
            println!("{}\n", InputMode::PlantImage.title());

            let mut workflow = Workflow::new(InputMode::PlantImage);
            workflow.select_image(CaptureSource::FilePicker, image_input::load_image(&image)?)?;
            run(&mut workflow, &config).await?;

            if let Some(text) = workflow.raw_text() {
                println!("{}", render::raw_result(&text));
            }
            if let Some(advice) = workflow.treatment() {
                println!("\n{}", render::treatment(&advice));
            }
            finish(&workflow, output.as_deref())?;
        }

        Commands::Soil { image, compress, no_fallback, output } => {
            println!("{}\n", InputMode::SoilImage.title());

            let artifact = image_input::prepare_upload(image_input::load_image(&image)?, compress)?;

            let mut workflow = Workflow::new(InputMode::SoilImage)
                .with_demo_fallback(config.demo_fallback && !no_fallback);
            workflow.select_image(CaptureSource::FilePicker, artifact)?;
            run(&mut workflow, &config).await?;

            if let Some(message) = workflow.error() {
                println!("Error: {}\n", message);
            }
            if workflow.outcome().is_some_and(|o| o.is_fallback()) {
                println!("⚠ 推論サービスに接続できなかったため、デモ結果を表示しています\n");
            }
            if let Some(view) = workflow.dashboard() {
                println!("{}", render::dashboard(&view));
            }
            finish(&workflow, output.as_deref())?;
        }

        Commands::Readings { nitrogen, phosphorus, potassium, ph, moisture, output } => {
            println!("{}\n", InputMode::SoilReadings.title());

            let mut workflow = Workflow::new(InputMode::SoilReadings);
            let given = [nitrogen, phosphorus, potassium, ph, moisture];
            for (field, value) in ReadingField::ALL.into_iter().zip(given) {
                let value = match value {
                    Some(v) if !v.trim().is_empty() => v,
                    _ => dialoguer::Input::<String>::new()
                        .with_prompt(field.placeholder())
                        .interact_text()?,
                };
                workflow.set_reading(field, value);
            }

            run(&mut workflow, &config).await?;

            if let Some(text) = workflow.raw_text() {
                println!("{}", render::raw_result(&text));
            }
            finish(&workflow, output.as_deref())?;
        }

        Commands::Config { set_plant_url, set_soil_url, set_readings_url, demo_fallback, show } => {
            // 環境変数の上書きを含めずに編集する
            let path = Config::config_path()?;
            let mut stored = Config::load_from(&path)?;
            let mut changed = false;

            if let Some(url) = set_plant_url {
                stored.endpoints.plant_url = url;
                changed = true;
            }
            if let Some(url) = set_soil_url {
                stored.endpoints.soil_image_url = url;
                changed = true;
            }
            if let Some(url) = set_readings_url {
                stored.endpoints.soil_readings_url = url;
                changed = true;
            }
            if let Some(enabled) = demo_fallback {
                stored.demo_fallback = enabled;
                changed = true;
            }

            if changed {
                stored.validate()?;
                stored.save_to(&path)?;
                println!("✔ 設定を保存しました: {}", path.display());
            }

            if show || !changed {
                let effective = stored.with_env_overrides();
                println!("設定（環境変数適用後）:");
                for mode in InputMode::ALL {
                    println!("  {:<14} {}", mode.as_str(), mode.endpoint(&effective.endpoints));
                }
                println!("  デモ結果: {}", if effective.demo_fallback { "有効" } else { "無効" });
                println!("  タイムアウト: {}秒", effective.timeout_seconds);
            }
        }
    }

    Ok(())
}
