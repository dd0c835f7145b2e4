use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use mdfig_fetch::{Config, FigureMigrator, display_elapsed_time, logger};

/// 下载 markdown 章节文件中 <img> 标签引用的图片,并改写为 markdown 图片语法
#[derive(Parser)]
#[command(name = "mdfig-fetch", version)]
struct Cli {
    /// 预览模式:只显示将要执行的操作,不下载、不建目录、不修改任何文件
    #[arg(long)]
    dry_run: bool,

    /// 待处理的章节目录
    #[arg(default_value = ".")]
    dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    println!("=== mdfig-fetch ===");
    println!("工作目录: {}", cli.dir.display());
    if cli.dry_run {
        println!("模式: 预览(不会做任何修改)");
    }
    println!();

    let config = Config::load()?;
    let migrator = FigureMigrator::new(&config)?;

    let start = Instant::now();
    migrator.run(&cli.dir, cli.dry_run).await?;
    display_elapsed_time(start.elapsed());

    Ok(())
}
