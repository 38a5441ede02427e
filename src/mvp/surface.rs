use std::{collections::BTreeMap, fmt};

/// Display regions the MVP projection writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Title,
    Meta,
    Stats,
    Reason,
}

impl Region {
    /// Every region, in display order.
    pub const ALL: [Region; 4] = [Region::Title, Region::Meta, Region::Stats, Region::Reason];

    /// Element id of the region in the host page.
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Title => "mvp-title",
            Region::Meta => "mvp-meta",
            Region::Stats => "mvp-stats",
            Region::Reason => "mvp-reason",
        }
    }
}

/// Presentation layer able to show text in named regions.
pub trait DisplaySurface {
    /// Whether the surface currently exposes `region`.
    fn has_region(&self, region: Region) -> bool;
    /// Replace the text content of `region`.
    fn set_text(&mut self, region: Region, text: &str);
}

/// In-memory surface, used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    regions: BTreeMap<Region, String>,
}

impl TextSurface {
    /// Surface exposing every MVP region, all blank.
    pub fn with_all_regions() -> Self {
        Self::with_regions(Region::ALL)
    }

    /// Surface exposing only `regions`, all blank.
    pub fn with_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            regions: regions
                .into_iter()
                .map(|region| (region, String::new()))
                .collect(),
        }
    }

    /// Text currently shown in `region`, if the region exists.
    pub fn text(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }
}

impl DisplaySurface for TextSurface {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(slot) = self.regions.get_mut(&region) {
            text.clone_into(slot);
        }
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for text in self.regions.values() {
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}
