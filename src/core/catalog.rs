//! Series catalog: slides, select items, and content panels.
//!
//! The three lists are independent; they line up only through the shifts in
//! [`super::visibility`].  The file format is line based:
//!
//! ```text
//! slide = Intro
//! item  = Episode 1 · Origins
//! panel = 2 | Episode 1 · Origins | https://www.youtube.com/embed/abc
//! ```

use super::error::{CarouselError, Result};

/// A content panel with its slide tag and playable video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub tag: u32,
    pub title: String,
    pub video_src: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub slides: Vec<String>,
    pub items: Vec<String>,
    pub panels: Vec<Panel>,
}

impl Catalog {
    /// Parse a catalog file.  A catalog must contain at least one slide.
    pub fn parse(s: &str) -> Result<Self> {
        let mut catalog = Catalog::default();

        for (idx, raw) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(catalog_err(line_no, "expected `key = value`"));
            };
            let value = value.trim();
            match key.trim() {
                "slide" => catalog.slides.push(value.to_string()),
                "item" => catalog.items.push(value.to_string()),
                "panel" => catalog.panels.push(parse_panel(line_no, value)?),
                other => return Err(catalog_err(line_no, &format!("unknown key `{other}`"))),
            }
        }

        if catalog.slides.is_empty() {
            return Err(CarouselError::PreconditionFailed(
                "catalog has no slides".into(),
            ));
        }
        Ok(catalog)
    }

    pub fn panel_tags(&self) -> Vec<u32> {
        self.panels.iter().map(|p| p.tag).collect()
    }

    /// Render back into the file format.
    pub fn serialise(&self) -> String {
        let mut lines = vec!["# series-carousel catalog".to_string(), String::new()];
        lines.extend(self.slides.iter().map(|s| format!("slide = {s}")));
        lines.push(String::new());
        lines.extend(self.items.iter().map(|i| format!("item = {i}")));
        lines.push(String::new());
        lines.extend(
            self.panels
                .iter()
                .map(|p| format!("panel = {} | {} | {}", p.tag, p.title, p.video_src)),
        );
        lines.push(String::new());
        lines.join("\n")
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let episodes = [
            ("Origins", "https://www.youtube.com/embed/8aGhZQkoFbQ"),
            ("Tooling", "https://www.youtube.com/embed/rTo2u13lVcQ"),
            ("Scaling the team", "https://www.youtube.com/embed/ZPKlkrr0Lq8"),
            ("Shipping", "https://www.youtube.com/embed/sX3uqFbsSHg"),
        ];

        let mut slides = vec!["Intro".to_string()];
        let mut items = Vec::new();
        let mut panels = vec![Panel {
            tag: 2,
            title: "Trailer".into(),
            video_src: "https://www.youtube.com/embed/5C_HPTJg5ek".into(),
        }];
        for (n, (name, src)) in episodes.iter().enumerate() {
            let title = format!("Episode {} · {name}", n + 1);
            slides.push(title.clone());
            items.push(title.clone());
            panels.push(Panel {
                tag: n as u32 + 3,
                title,
                video_src: (*src).to_string(),
            });
        }
        slides.push("Next season".into());
        items.push("Coming soon".into());

        Catalog {
            slides,
            items,
            panels,
        }
    }
}

fn parse_panel(line: usize, value: &str) -> Result<Panel> {
    let parts: Vec<&str> = value.splitn(3, '|').map(str::trim).collect();
    let [tag, title, src] = parts.as_slice() else {
        return Err(catalog_err(line, "panel needs `tag | title | video`"));
    };
    let tag = tag
        .parse::<u32>()
        .map_err(|_| catalog_err(line, &format!("bad panel tag `{tag}`")))?;
    Ok(Panel {
        tag,
        title: title.to_string(),
        video_src: src.to_string(),
    })
}

fn catalog_err(line: usize, message: &str) -> CarouselError {
    CarouselError::Catalog {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_lists() {
        let cat = Catalog::parse(
            "# demo\n\
             slide = Intro\n\
             slide = One\n\
             item = One\n\
             \n\
             panel = 2 | Trailer | https://v/1\n",
        )
        .unwrap();
        assert_eq!(cat.slides, vec!["Intro", "One"]);
        assert_eq!(cat.items, vec!["One"]);
        assert_eq!(cat.panels[0].tag, 2);
        assert_eq!(cat.panels[0].video_src, "https://v/1");
    }

    #[test]
    fn reports_the_offending_line() {
        let err = Catalog::parse("slide = A\npanel = x | T | v\n").unwrap_err();
        assert_eq!(
            err,
            CarouselError::Catalog {
                line: 2,
                message: "bad panel tag `x`".into()
            }
        );
        assert!(matches!(
            Catalog::parse("slide = A\npanel = 2 | T\n"),
            Err(CarouselError::Catalog { line: 2, .. })
        ));
        assert!(matches!(
            Catalog::parse("colour = red\n"),
            Err(CarouselError::Catalog { line: 1, .. })
        ));
    }

    #[test]
    fn catalog_without_slides_is_a_precondition_failure() {
        assert!(matches!(
            Catalog::parse("item = lonely\n"),
            Err(CarouselError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn builtin_catalog_reads_back() {
        let builtin = Catalog::builtin();
        let reparsed = Catalog::parse(&builtin.serialise()).unwrap();
        assert_eq!(reparsed, builtin);
        assert_eq!(builtin.items.len() + 1, builtin.slides.len());
    }
}
