use serde_json::Value;
use tracing::warn;

use super::{
    error::{MvpError, MvpResult},
    model::MvpRecord,
    surface::{DisplaySurface, Region},
};

/// Display strings derived from an [`MvpRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MvpDisplay {
    pub title: String,
    pub meta: String,
    pub stats: String,
    pub reason: String,
}

impl MvpDisplay {
    /// Format the record's fields for display.
    pub fn project(record: &MvpRecord) -> Self {
        let stats = &record.stats;
        Self {
            title: format!("MVP — {}", record.label),
            // Only the first dash of the slug becomes a space.
            meta: format!(
                "{} · {} · {}",
                record.player_id.replacen('-', " ", 1),
                record.club,
                record.league
            ),
            stats: format!(
                "{} — Jogos: {} · Golos: {} · Assistências: {} · Minutos: {}",
                record.stats_window,
                stat_text(&stats.matches),
                stat_text(&stats.goals),
                stat_text(&stats.assists),
                stat_text(&stats.minutes)
            ),
            reason: record.reason.clone(),
        }
    }

    /// Text destined for `region`.
    pub fn text_for(&self, region: Region) -> &str {
        match region {
            Region::Title => &self.title,
            Region::Meta => &self.meta,
            Region::Stats => &self.stats,
            Region::Reason => &self.reason,
        }
    }

    /// Write every string into `surface`, or nothing at all when a region is missing.
    pub fn apply_to<S>(&self, surface: &mut S) -> MvpResult<()>
    where
        S: DisplaySurface + ?Sized,
    {
        if let Some(missing) = Region::ALL
            .into_iter()
            .find(|region| !surface.has_region(*region))
        {
            warn!(region = missing.element_id(), "MVP display region not found");
            return Err(MvpError::MissingRegion(missing.element_id()));
        }

        for region in Region::ALL {
            surface.set_text(region, self.text_for(region));
        }
        Ok(())
    }
}

/// Strings print without their quotes; every other value in its JSON form.
fn stat_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
