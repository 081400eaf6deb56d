use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agricare")]
#[command(about = "植物病害・土壌健康の診断クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 葉の写真から病害を判定
    Plant {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 土壌の写真から健康状態を解析
    Soil {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// JPEG（品質80）に再エンコードして送信
        #[arg(long)]
        compress: bool,

        /// 失敗時にデモ結果を表示しない
        #[arg(long)]
        no_fallback: bool,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 土壌の測定値から健康状態を予測（未指定の項目は対話入力）
    Readings {
        #[arg(long)]
        nitrogen: Option<String>,

        #[arg(long)]
        phosphorus: Option<String>,

        #[arg(long)]
        potassium: Option<String>,

        #[arg(long)]
        ph: Option<String>,

        #[arg(long)]
        moisture: Option<String>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 植物診断のベースURL
        #[arg(long)]
        set_plant_url: Option<String>,

        /// 土壌画像解析のベースURL
        #[arg(long)]
        set_soil_url: Option<String>,

        /// 土壌数値予測のベースURL
        #[arg(long)]
        set_readings_url: Option<String>,

        /// 失敗時のデモ結果表示 (true/false)
        #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
        demo_fallback: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
