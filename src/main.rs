//! failsig 命令行工具：读取日志窗口，输出失败签名(JSON)

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use failsig::{Category, Classifier, ConfigManager, GlobalConfig, RuleLoader};

/// CI失败签名提取
#[derive(Debug, Parser)]
#[command(name = "failsig", version, about)]
struct Cli {
    /// CI作业名，例如 tikv_ghpr_test
    #[arg(short, long)]
    job: String,

    /// 失败类别：environment / compile / check / case，缺省时分析全部类别
    #[arg(short, long)]
    category: Option<Category>,

    /// JSON配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON规则文件（覆盖配置中的 rule_path）
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 日志窗口文件，缺省读取标准输入
    input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CategorySignatures {
    category: Category,
    signatures: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    let mut config: GlobalConfig = match &cli.config {
        Some(path) => ConfigManager::from_json_file(path)
            .with_context(|| format!("加载配置文件{}失败", path.display()))?,
        None => ConfigManager::get_default(),
    };
    config.verbose |= cli.verbose;
    if let Some(rules) = cli.rules {
        config.rule_path = Some(rules);
    }

    let rule_lib = RuleLoader::load(&config).context("加载规则库失败")?;
    let classifier = Classifier::with_rules(config, &rule_lib).context("初始化分类器失败")?;

    let content = match &cli.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("读取日志文件{}失败", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("读取标准输入失败")?;
            buf
        }
    };
    let lines: Vec<&str> = content.lines().collect();

    let results: Vec<CategorySignatures> = match cli.category {
        Some(category) => vec![CategorySignatures {
            category,
            signatures: classifier.classify(category, &cli.job, &lines),
        }],
        None => classifier
            .classify_all(&cli.job, &lines)
            .into_iter()
            .map(|(category, signatures)| CategorySignatures { category, signatures })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
