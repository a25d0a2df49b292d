use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// Descriptive counts over the final User-Agent list.
///
/// Classification is substring containment on marker tokens, so categories
/// overlap: a Vivaldi or Brave string also contains "Chrome" and is counted
/// as Chrome.
#[derive(Debug, Serialize)]
pub struct Metadata {
    pub generated_at: String,
    pub total_count: usize,
    pub browsers: BrowserCounts,
    pub platforms: PlatformCounts,
}

#[derive(Debug, Serialize)]
pub struct BrowserCounts {
    pub chrome: usize,
    pub firefox: usize,
    pub safari: usize,
    pub edge: usize,
    pub opera: usize,
    pub mobile: usize,
}

#[derive(Debug, Serialize)]
pub struct PlatformCounts {
    pub windows: usize,
    pub macos: usize,
    pub linux: usize,
    pub ios: usize,
    pub android: usize,
}

fn count_matching(user_agents: &[String], predicate: impl Fn(&str) -> bool) -> usize {
    user_agents.iter().filter(|ua| predicate(ua)).count()
}

impl Metadata {
    pub fn compute(user_agents: &[String]) -> Metadata {
        let browsers = BrowserCounts {
            chrome: count_matching(user_agents, |ua| ua.contains("Chrome")),
            firefox: count_matching(user_agents, |ua| ua.contains("Firefox")),
            safari: count_matching(user_agents, |ua| {
                ua.contains("Safari") && !ua.contains("Chrome")
            }),
            edge: count_matching(user_agents, |ua| ua.contains("Edg/")),
            opera: count_matching(user_agents, |ua| ua.contains("OPR/")),
            mobile: count_matching(user_agents, |ua| ua.contains("Mobile")),
        };
        let platforms = PlatformCounts {
            windows: count_matching(user_agents, |ua| ua.contains("Windows")),
            macos: count_matching(user_agents, |ua| ua.contains("Macintosh")),
            linux: count_matching(user_agents, |ua| ua.contains("Linux")),
            ios: count_matching(user_agents, |ua| {
                ua.contains("iPhone") || ua.contains("iPad")
            }),
            android: count_matching(user_agents, |ua| ua.contains("Android")),
        };
        Metadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            total_count: user_agents.len(),
            browsers,
            platforms,
        }
    }
}

impl fmt::Display for BrowserCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chrome({}), Firefox({}), Safari({}), Edge({}), Opera({}), Mobile({})",
            self.chrome, self.firefox, self.safari, self.edge, self.opera, self.mobile
        )
    }
}

impl fmt::Display for PlatformCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Windows({}), macOS({}), Linux({}), iOS({}), Android({})",
            self.windows, self.macos, self.linux, self.ios, self.android
        )
    }
}
