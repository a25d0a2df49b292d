use tracing::debug;

/// Baseline table of real-world User-Agent values.
pub const BASE_USER_AGENTS: [&str; 33] = [
    // Chrome
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    // Firefox
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/120.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/119.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:109.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:109.0) Gecko/20100101 Firefox/120.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/120.0",
    // Safari
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Safari/605.1.15",
    // Edge
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36 Edg/119.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    // mobile
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; SM-G998B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36",
    // Opera
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 OPR/106.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 OPR/106.0.0.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 OPR/106.0.0.0",
    // Chromium and Gecko derivatives
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Vivaldi/6.5.3206.39",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Brave/1.61.109",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/121.0 Waterfox/G6.0.8",
];

/// A named ordered list of substitution values for one template slot.
pub struct VariationAxis {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

pub const WINDOWS_VERSIONS: VariationAxis = VariationAxis {
    name: "windows",
    values: &["10.0", "11.0"],
};

pub const CHROME_VERSIONS: VariationAxis = VariationAxis {
    name: "chrome",
    values: &["118.0.0.0", "119.0.0.0", "120.0.0.0", "121.0.0.0"],
};

pub const FIREFOX_VERSIONS: VariationAxis = VariationAxis {
    name: "firefox",
    values: &["119.0", "120.0", "121.0", "122.0"],
};

/// Pairs a platform axis with a browser axis and renders one concrete
/// User-Agent string per combination of their values.
pub struct VariationTemplate {
    pub platform: VariationAxis,
    pub browser: VariationAxis,
    pub render: fn(&str, &str) -> String,
}

impl VariationTemplate {
    // platform outer, browser inner, values in declared order
    pub fn expand(&self) -> Vec<String> {
        let mut expanded =
            Vec::with_capacity(self.platform.values.len() * self.browser.values.len());
        for platform_version in self.platform.values {
            for browser_version in self.browser.values {
                expanded.push((self.render)(platform_version, browser_version));
            }
        }
        expanded
    }
}

fn windows_chrome(windows_version: &str, chrome_version: &str) -> String {
    format!(
        "Mozilla/5.0 (Windows NT {}; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
        windows_version, chrome_version
    )
}

fn windows_firefox(windows_version: &str, firefox_version: &str) -> String {
    format!(
        "Mozilla/5.0 (Windows NT {}; Win64; x64; rv:109.0) Gecko/20100101 Firefox/{}",
        windows_version, firefox_version
    )
}

pub const VARIATION_TEMPLATES: [VariationTemplate; 2] = [
    VariationTemplate {
        platform: WINDOWS_VERSIONS,
        browser: CHROME_VERSIONS,
        render: windows_chrome,
    },
    VariationTemplate {
        platform: WINDOWS_VERSIONS,
        browser: FIREFOX_VERSIONS,
        render: windows_firefox,
    },
];

/// Baseline table followed by every templated combination, duplicates permitted.
pub fn generate_variations() -> Vec<String> {
    let mut variations: Vec<String> = BASE_USER_AGENTS.iter().map(|ua| ua.to_string()).collect();
    for template in &VARIATION_TEMPLATES {
        let expanded = template.expand();
        debug!(
            "expanded {} {}/{} variations",
            expanded.len(),
            template.platform.name,
            template.browser.name
        );
        variations.extend(expanded);
    }
    variations
}

#[cfg(test)]
mod user_agents_tests {
    use super::*;

    #[test]
    fn expand_is_a_full_cross_product() {
        let template = &VARIATION_TEMPLATES[0];
        let expanded = template.expand();
        assert_eq!(
            expanded.len(),
            template.platform.values.len() * template.browser.values.len()
        );
    }

    #[test]
    fn expand_substitutes_axis_values_verbatim() {
        // windows/chrome template, platform outer, browser inner
        let expanded = VARIATION_TEMPLATES[0].expand();
        assert_eq!(
            expanded[0],
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36"
        );
        // ("11.0", "121.0.0.0") is the last combination
        assert_eq!(
            expanded[7],
            "Mozilla/5.0 (Windows NT 11.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
        );
    }

    #[test]
    fn expand_substitutes_firefox_versions() {
        let expanded = VARIATION_TEMPLATES[1].expand();
        assert_eq!(
            expanded[0],
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/119.0"
        );
        assert_eq!(
            expanded[7],
            "Mozilla/5.0 (Windows NT 11.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/122.0"
        );
    }

    #[test]
    fn generation_starts_with_the_baseline_table() {
        let variations = generate_variations();
        assert_eq!(variations.len(), BASE_USER_AGENTS.len() + 8 + 8);
        for (index, base) in BASE_USER_AGENTS.iter().enumerate() {
            assert_eq!(&variations[index], base);
        }
    }
}
