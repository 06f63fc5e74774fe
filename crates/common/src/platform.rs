//! User-agent sniffing.
//!
//! Every check reads the user agent through a [`HostEnvironment`] and
//! answers `false` when the host is not a browser.

use std::sync::LazyLock;

use parakeet_ports::HostEnvironment;
use regex_lite::Regex;

static WECHAT_DEV_TOOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)wechatdevtools").expect("valid regex"));
static IOS_DEVICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iPhone|iPad|iPod").expect("valid regex"));

fn browser_user_agent(host: &dyn HostEnvironment) -> Option<String> {
    if !host.is_browser() {
        return None;
    }
    host.user_agent()
}

/// Whether the page runs inside the WeChat developer tools.
pub fn is_wechat_dev_tools(host: &dyn HostEnvironment) -> bool {
    browser_user_agent(host).is_some_and(|ua| WECHAT_DEV_TOOLS.is_match(&ua))
}

/// Whether the page runs on an iPhone, iPad or iPod.
///
/// The WeChat developer tools emulator reports iOS user agents; it is never
/// treated as iOS.
pub fn is_ios(host: &dyn HostEnvironment) -> bool {
    if is_wechat_dev_tools(host) {
        return false;
    }
    browser_user_agent(host).is_some_and(|ua| IOS_DEVICE.is_match(&ua))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parakeet_ports::MockHostEnvironment;

    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const WECHAT_DEVTOOLS_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_2_3 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 wechatdevtools/1.06.2310080 \
        MicroMessenger/8.0.5 Language/zh_CN webview/";
    const CHROME_DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
        (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

    fn browser(user_agent: &'static str) -> MockHostEnvironment {
        let mut host = MockHostEnvironment::new();
        host.expect_is_browser().return_const(true);
        host.expect_user_agent()
            .returning(move || Some(user_agent.to_string()));
        host
    }

    #[test]
    fn test_is_ios_on_iphone_safari() {
        let host = browser(SAFARI_IPHONE);
        assert!(is_ios(&host));
        assert!(!is_wechat_dev_tools(&host));
    }

    #[test]
    fn test_is_ios_matches_case_insensitively() {
        let host = browser("some-webview (IPAD; OS 16)");
        assert!(is_ios(&host));
    }

    #[test]
    fn test_wechat_dev_tools_overrides_ios() {
        let host = browser(WECHAT_DEVTOOLS_IPHONE);
        assert!(is_wechat_dev_tools(&host));
        assert!(!is_ios(&host));
    }

    #[test]
    fn test_desktop_browser_is_neither() {
        let host = browser(CHROME_DESKTOP);
        assert!(!is_ios(&host));
        assert!(!is_wechat_dev_tools(&host));
    }

    #[test]
    fn test_non_browser_host_never_reads_user_agent() {
        let mut host = MockHostEnvironment::new();
        host.expect_is_browser().return_const(false);
        host.expect_user_agent().never();

        assert!(!is_ios(&host));
        assert!(!is_wechat_dev_tools(&host));
    }

    #[test]
    fn test_browser_without_user_agent() {
        let mut host = MockHostEnvironment::new();
        host.expect_is_browser().return_const(true);
        host.expect_user_agent().returning(|| None);

        assert!(!is_ios(&host));
    }
}
