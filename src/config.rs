//! 全局配置管理,存储所有可配置项
//! 主要是各提取器的作业作用域，以及可选的外部规则文件

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::FailsigResult;

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    // Go单元测试提取器的作业白名单
    pub unit_test_jobs: BTreeSet<String>,
    // Rust原生测试提取器作用的作业
    pub native_test_job: String,
    // FATAL日志检查提取器作用的作业
    pub annotated_check_job: String,
    // TiFlash集成测试作业（Error:/Result: 分支）
    pub tics_job: String,
    // 外部规则库路径（为空时使用内置规则）
    pub rule_path: Option<PathBuf>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            unit_test_jobs: ["tidb_ghpr_unit_test", "tidb_ghpr_check", "tidb_ghpr_check_2"]
                .into_iter()
                .map(String::from)
                .collect(),
            native_test_job: "tikv_ghpr_test".to_string(),
            annotated_check_job: "tidb_ghpr_integration_ddl_test".to_string(),
            tics_job: "tidb_ghpr_tics_test".to_string(),
            rule_path: None,
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从JSON文件读取配置，缺省字段取默认值
    pub fn from_json_file(path: &Path) -> FailsigResult<GlobalConfig> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn unit_test_jobs<I, S>(mut self, jobs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.unit_test_jobs = jobs.into_iter().map(Into::into).collect();
        self
    }

    pub fn native_test_job(mut self, job: impl Into<String>) -> Self {
        self.config.native_test_job = job.into();
        self
    }

    pub fn annotated_check_job(mut self, job: impl Into<String>) -> Self {
        self.config.annotated_check_job = job.into();
        self
    }

    pub fn tics_job(mut self, job: impl Into<String>) -> Self {
        self.config.tics_job = job.into();
        self
    }

    pub fn rule_path(mut self, path: PathBuf) -> Self {
        self.config.rule_path = Some(path);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
