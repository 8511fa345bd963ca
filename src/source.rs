//! Locates the spreadsheet behind a user-supplied Google Sheets URL.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{ImportError, Result};

pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

static SHEET_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/spreadsheets/d/([a-zA-Z0-9_-]+)").expect("valid regex"));
static GID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#&]gid=([0-9]+)").expect("valid regex"));

/// Identifiers extracted from a sheet URL. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLocation {
    pub sheet_id: Option<String>,
    pub gid: Option<String>,
}

/// Pure pattern extraction; never fails and never touches the network.
pub fn parse_sheet_url(url: &str) -> SheetLocation {
    SheetLocation {
        sheet_id: first_capture(&SHEET_ID, url),
        gid: first_capture(&GID, url),
    }
}

fn first_capture(re: &Regex, s: &str) -> Option<String> {
    re.captures(s)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// A located spreadsheet with a guaranteed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSource {
    pub sheet_id: String,
    pub gid: Option<String>,
}

impl SheetSource {
    /// Locates the sheet, failing with [`ImportError::InvalidSource`] when the
    /// URL carries no spreadsheet identifier.
    pub fn locate(url: &str) -> Result<Self> {
        let SheetLocation { sheet_id, gid } = parse_sheet_url(url);
        match sheet_id {
            Some(sheet_id) => Ok(SheetSource { sheet_id, gid }),
            None => Err(ImportError::InvalidSource {
                url: url.to_string(),
            }),
        }
    }

    /// CSV export endpoint for this sheet under `base`.
    pub fn export_url(&self, base: &str) -> String {
        let mut url = format!(
            "{}/{}/export?format=csv",
            base.trim_end_matches('/'),
            self.sheet_id
        );
        if let Some(gid) = &self.gid {
            url.push_str("&gid=");
            url.push_str(gid);
        }
        url
    }
}
