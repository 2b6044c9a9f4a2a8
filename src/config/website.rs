use serde::Serialize;

/// Descriptive metadata about the site, read by presentation layers
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    /// Who built the site
    pub author: &'static str,
    /// Open Graph locale, e.g. `en_US`
    pub og_language: &'static str,
    /// `lang` attribute of the document
    pub site_language: &'static str,
    /// Full title
    pub site_title: &'static str,
    /// Title for app launchers
    pub site_short_title: &'static str,
    /// Meta description
    pub description: &'static str,
    /// Canonical origin
    pub site_url: &'static str,
    /// Web manifest background colour
    pub background_color: &'static str,
    /// Browser theme colour
    pub theme_color: &'static str,
    /// Contact address
    pub contact_email: &'static str,
    /// Author's GitHub profile
    pub github_page: &'static str,
}

/// The MusicBingo site
pub const WEBSITE: Website = Website {
    author: "GardenSnakes",
    og_language: "en_US",
    site_language: "en-US",
    site_title: "MusicBingo",
    site_short_title: "MusicBingo",
    description: "Scan QR codes, listen to songs, and guess the track using hints like artist, year, and title. Play with friends and test your music knowledge!",
    site_url: "https://musicbingo.mrproper.dev",
    background_color: "#1b4079",
    theme_color: "#d62828",
    contact_email: "contact@mrproper.dev",
    github_page: "https://github.com/GewoonJaap",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_hex_triplets() {
        for color in [WEBSITE.background_color, WEBSITE.theme_color] {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(WEBSITE).unwrap();
        assert_eq!(value["siteTitle"], "MusicBingo");
        assert_eq!(value["themeColor"], "#d62828");
        assert_eq!(value["githubPage"], "https://github.com/GewoonJaap");
    }
}
