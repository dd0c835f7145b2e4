use std::path::{Path, PathBuf};

use anyhow::Result;
use bytes::Bytes;
use tokio::fs;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct Processor {
    figures_dir: PathBuf,
}

impl Processor {
    pub fn new(figures_dir: PathBuf) -> Self {
        Self { figures_dir }
    }

    /// 图片字节原样落盘到 figures 目录
    #[instrument(skip_all)]
    pub async fn write_image(&self, image_bytes: Bytes, filename: &str) -> Result<()> {
        let image_path = self.figures_dir.join(filename);
        fs::write(&image_path, &image_bytes)
            .await
            .map_err(|e| anyhow::anyhow!("保存图片失败 {}: {}", image_path.display(), e))?;
        debug!("图片已保存到: {}", image_path.display());
        Ok(())
    }

    /// 改写后的文档写回原路径,编码保持 UTF-8 不变
    #[instrument(skip_all)]
    pub async fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .await
            .map_err(|e| anyhow::anyhow!("写回文档失败 {}: {}", path.display(), e))?;
        debug!("文档已写回: {}", path.display());
        Ok(())
    }
}
