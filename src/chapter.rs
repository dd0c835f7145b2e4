use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static CHAPTER_NUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"chapter(\d+)").expect("正则表达式编译失败"));

/// 从文件名推导章节编号。
/// prologue 固定映射为 "0",epilogue 固定映射为 "8";
/// 其余无法识别的文件名也回退到 "0",与 prologue 共用同一个计数桶(既有行为,保持不变)。
pub fn chapter_id(filename: &str) -> String {
    if let Some(cap) = CHAPTER_NUM.captures(filename) {
        return cap[1].to_owned();
    }
    if filename.contains("prologue") {
        return "0".to_owned();
    }
    if filename.contains("epilogue") {
        return "8".to_owned();
    }
    "0".to_owned()
}

/// 每章已分配图片序号的运行期计数器。
/// 由编排器持有并显式传入每个文档的处理步骤,同一章节编号跨文件连续计数。
#[derive(Debug, Default)]
pub struct ChapterCounters {
    counts: HashMap<String, u32>,
}

impl ChapterCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配该章节的下一个序号,从 1 开始,单调递增
    pub fn next(&mut self, chapter: &str) -> u32 {
        let count = self.counts.entry(chapter.to_owned()).or_insert(0);
        *count += 1;
        *count
    }
}
