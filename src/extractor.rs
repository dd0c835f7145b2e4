use std::sync::LazyLock;

use regex::Regex;

// src 在 alt 之前 / alt 在 src 之前,两个独立模式归一成同一种记录,
// 避免单个交替正则里两条分支悄悄写歪
static SRC_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]*src="([^"]+)"[^>]*alt="([^"]*)"[^>]*/?>"#).expect("正则表达式编译失败")
});

static ALT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]*alt="([^"]*)"[^>]*src="([^"]+)"[^>]*/?>"#).expect("正则表达式编译失败")
});

/// 文档中发现的一个内嵌 `<img>` 标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImgRef {
    /// 原始匹配子串,逐字节保留,后续作为替换的查找键
    pub raw: String,
    pub src: String,
    pub alt: String,
}

/// 扫描全文,按出现顺序返回所有 `<img>` 标签。
/// 属性值按字面提取,不做任何 URL 校验或实体转义;
/// 两种属性顺序都不匹配的标签会被直接忽略。
pub fn extract_img_tags(content: &str) -> Vec<ImgRef> {
    let mut found: Vec<(usize, ImgRef)> = Vec::new();

    for cap in SRC_FIRST.captures_iter(content) {
        found.push((
            cap.get(0).map_or(0, |m| m.start()),
            ImgRef {
                raw: cap[0].to_owned(),
                src: cap[1].to_owned(),
                alt: cap[2].to_owned(),
            },
        ));
    }

    for cap in ALT_FIRST.captures_iter(content) {
        found.push((
            cap.get(0).map_or(0, |m| m.start()),
            ImgRef {
                raw: cap[0].to_owned(),
                alt: cap[1].to_owned(),
                src: cap[2].to_owned(),
            },
        ));
    }

    // 两个模式互斥(一个标签内 src/alt 只有一种先后),按出现位置排序即得文档顺序
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, tag)| tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_before_alt() {
        let content = r#"text <img class="x" src="http://a/1.png" alt="one"/> more"#;
        let tags = extract_img_tags(content);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].src, "http://a/1.png");
        assert_eq!(tags[0].alt, "one");
        assert_eq!(tags[0].raw, r#"<img class="x" src="http://a/1.png" alt="one"/>"#);
    }

    #[test]
    fn alt_before_src() {
        let content = r#"<img alt="one" src="http://a/1.png">"#;
        let tags = extract_img_tags(content);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].src, "http://a/1.png");
        assert_eq!(tags[0].alt, "one");
    }

    #[test]
    fn both_orders_yield_equivalent_records() {
        let a = extract_img_tags(r#"<img src="http://a/p.png" alt="label">"#);
        let b = extract_img_tags(r#"<img alt="label" src="http://a/p.png">"#);
        assert_eq!(a[0].src, b[0].src);
        assert_eq!(a[0].alt, b[0].alt);
    }

    #[test]
    fn document_order_across_both_patterns() {
        let content = concat!(
            r#"<img alt="first" src="http://a/1.png"> mid "#,
            r#"<img src="http://a/2.png" alt="second"> tail "#,
            r#"<img alt="third" src="http://a/3.png">"#,
        );
        let alts: Vec<_> = extract_img_tags(content)
            .into_iter()
            .map(|t| t.alt)
            .collect();
        assert_eq!(alts, ["first", "second", "third"]);
    }

    #[test]
    fn empty_alt_is_captured_verbatim() {
        let tags = extract_img_tags(r#"<img src="http://a/1.png" alt=""/>"#);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].alt, "");
    }

    #[test]
    fn unmatched_tag_is_ignored() {
        let tags = extract_img_tags(r#"<img class="deco"> <img src="http://a/1.png">"#);
        assert!(tags.is_empty());
    }

    #[test]
    fn no_tags_means_empty_result() {
        assert!(extract_img_tags("plain markdown, no images").is_empty());
    }

    #[test]
    fn rescan_is_deterministic() {
        let content = r#"<img src="http://a/1.png" alt="x"> <img alt="y" src="http://a/2.png">"#;
        assert_eq!(extract_img_tags(content), extract_img_tags(content));
    }

    #[test]
    fn raw_is_a_precise_replace_key() {
        let content = concat!(
            r#"<img src="http://a/1.png" alt="one"> "#,
            r#"<img src="http://a/1.png" alt="two">"#,
        );
        let tags = extract_img_tags(content);
        assert_eq!(tags.len(), 2);
        assert_ne!(tags[0].raw, tags[1].raw);
        // 只替换第一个标签的原文,属性不同的相似标签不受影响
        let replaced = content.replace(&tags[0].raw, "![one](figures/pic1-1.png)");
        assert!(replaced.contains(&tags[1].raw));
        assert!(!replaced.contains(&tags[0].raw));
    }
}
