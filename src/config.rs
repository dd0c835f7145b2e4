use anyhow::Result;
use serde::Deserialize;

static CONFIG_FILE: &str = "mdfig";

#[derive(Deserialize)]
pub struct Config {
    /// 图片输出子目录名
    #[serde(default = "default_figures_dir")]
    pub figures_dir: String,
    /// 单张图片的下载超时(秒)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 固定 User-Agent;缺省时随机伪装一个常见浏览器 UA
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_figures_dir() -> String {
    "figures".to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            figures_dir: default_figures_dir(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl Config {
    /// 读取可选的 mdfig.toml;文件不存在时全部使用默认值
    pub fn load() -> Result<Self> {
        config::Config::builder()
            .add_source(
                config::File::with_name(CONFIG_FILE)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("配置文件反序列化失败: {}", e))
    }
}
