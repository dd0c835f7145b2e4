pub mod downloader;
pub mod processor;

pub use downloader::Downloader;
pub use processor::Processor;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::chapter::{ChapterCounters, chapter_id};
use crate::config::Config;
use crate::extractor::extract_img_tags;

pub struct FigureMigrator {
    downloader: Downloader,
    figures_dir_name: String,
}

impl FigureMigrator {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            downloader: Downloader::new(config)?,
            figures_dir_name: config.figures_dir.clone(),
        })
    }

    /// 处理整个目录:定位章节文件,逐个改写,输出进度汇总。
    /// 预览模式下不建目录、不下载、不写回,其余流程完全一致。
    #[instrument(skip_all)]
    pub async fn run(&self, base_dir: &Path, dry_run: bool) -> Result<()> {
        let figures_dir = base_dir.join(&self.figures_dir_name);
        if !dry_run {
            fs::create_dir_all(&figures_dir).await?;
        }

        let md_files = find_chapter_files(base_dir).await?;
        if md_files.is_empty() {
            info!("未找到 chapter*.md 文件");
            return Ok(());
        }

        info!("共找到 {} 个 markdown 文件", md_files.len());
        info!("插图目录: {}", figures_dir.display());

        let processor = Processor::new(figures_dir);
        let mut counters = ChapterCounters::new();

        for md_file in &md_files {
            self.process_document(md_file, &processor, &mut counters, dry_run)
                .await?;
        }

        if dry_run {
            info!("预览完成,未修改任何文件");
        } else {
            info!("全部处理完成");
        }
        Ok(())
    }

    /// 单个文档的完整处理:提取、编号、下载、替换、按需写回。
    /// 单张图片的下载/保存失败只跳过这一张,原始标签原样保留。
    #[instrument(skip_all, fields(file = %path.display()))]
    async fn process_document(
        &self,
        path: &Path,
        processor: &Processor,
        counters: &mut ChapterCounters,
        dry_run: bool,
    ) -> Result<()> {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        info!("正在处理: {}", filename);

        let content = fs::read_to_string(path).await?;
        let img_tags = extract_img_tags(&content);
        if img_tags.is_empty() {
            info!("未发现 <img> 标签");
            return Ok(());
        }
        info!("发现 {} 个 <img> 标签", img_tags.len());

        let chapter = chapter_id(filename);
        let mut new_content = content.clone();

        for tag in &img_tags {
            // 先占序号再下载,失败的图片也会消耗一个序号(既有行为)
            let num = counters.next(&chapter);
            let new_filename = format!("pic{}-{}.png", chapter, num);
            let relative_path = format!("{}/{}", self.figures_dir_name, new_filename);
            let markdown_img = format!(
                "![{}]({})",
                display_alt(&tag.alt, &chapter, num),
                relative_path
            );

            info!("[{}] {}", num, truncate_url(&tag.src));
            info!("    -> {}", relative_path);

            if !dry_run {
                if let Err(e) = self.download_one(processor, &tag.src, &new_filename).await {
                    warn!("图片下载失败,跳过替换: {}: {:#}", tag.src, e);
                    continue;
                }
            }

            new_content = new_content.replace(&tag.raw, &markdown_img);
        }

        if new_content != content {
            if dry_run {
                info!("(预览) 将更新 {}", filename);
            } else {
                processor.write_document(path, &new_content).await?;
                info!("已更新 {}", filename);
            }
        }
        Ok(())
    }

    async fn download_one(&self, processor: &Processor, src: &str, filename: &str) -> Result<()> {
        let bytes = self.downloader.fetch(src).await?;
        processor.write_image(bytes, filename).await?;
        Ok(())
    }
}

/// 基目录下所有 chapter*.md 文件,按文件名字典序排列
pub async fn find_chapter_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if name.starts_with("chapter") && name.ends_with(".md") && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// 无 alt 或占位 alt 时合成 "図{章}-{序号}" 作为显示文本
fn display_alt(alt: &str, chapter: &str, num: u32) -> String {
    if !alt.is_empty() && alt != "image" {
        alt.to_owned()
    } else {
        format!("図{}-{}", chapter, num)
    }
}

fn truncate_url(url: &str) -> String {
    if url.chars().count() <= 60 {
        url.to_owned()
    } else {
        let head: String = url.chars().take(60).collect();
        format!("{}...", head)
    }
}
