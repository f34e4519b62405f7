pub const SOURCE_URL: &str =
    "https://raw.githubusercontent.com/rompelhd/ZeroBrave/refs/heads/main/policies.json";

pub const FLATPAK_APP_ID: &str = "com.brave.Browser";

/// Managed-policy file per platform id (`std::env::consts::OS`).
pub const POLICY_PATHS: &[(&str, &str)] = &[
    (
        "windows",
        r"C:\Program Files\BraveSoftware\Brave-Browser\Application\policy\managed\policies.json",
    ),
    ("linux", "/etc/brave/policies/managed/policies.json"),
];

/// Platforms where the browser may ship as a Flatpak.
pub const FLATPAK_PLATFORMS: &[&str] = &["linux"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyValue {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl From<PolicyValue> for serde_json::Value {
    fn from(v: PolicyValue) -> Self {
        match v {
            PolicyValue::Bool(b) => serde_json::Value::Bool(b),
            PolicyValue::Int(i) => serde_json::Value::from(i),
            PolicyValue::Str(s) => serde_json::Value::from(s),
        }
    }
}

#[derive(Debug)]
pub struct PolicyGroup {
    pub id: &'static str,
    pub tag: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub policies: &'static [(&'static str, PolicyValue)],
}

use PolicyValue::{Bool, Int, Str};

pub static CATALOG: &[PolicyGroup] = &[
    PolicyGroup {
        id: "ai",
        tag: "[AI]",
        name: "Disable AI Features",
        description: "Leo, Gemini, Lens, AI Writing",
        policies: &[
            ("BraveAIChatEnabled", Bool(false)),
            ("HelpMeWriteSettings", Int(2)),
            ("GeminiSettings", Int(1)),
            ("GenAiDefaultSettings", Int(2)),
            ("GenAiLensOverlaySettings", Int(2)),
            ("GenAILocalFoundationalModelSettings", Int(1)),
            ("LensRegionSearchEnabled", Bool(false)),
            ("LensDesktopNTPSearchEnabled", Bool(false)),
            ("LensOverlaySettings", Int(1)),
        ],
    },
    PolicyGroup {
        id: "privacy",
        tag: "[PRIV]",
        name: "Block Tracking",
        description: "Cookies, Fingerprinting, WebRTC",
        policies: &[
            ("BlockThirdPartyCookies", Bool(true)),
            ("PrivacySandboxFingerprintingProtectionEnabled", Bool(true)),
            ("PrivacySandboxPromptEnabled", Bool(false)),
            ("PrivacySandboxAdTopicsEnabled", Bool(false)),
            ("PrivacySandboxSiteEnabledAdsEnabled", Bool(false)),
            ("PrivacySandboxAdMeasurementEnabled", Bool(false)),
            ("WebRtcIPHandling", Str("disable_non_proxied_udp")),
            ("WebRtcEventLogCollectionAllowed", Bool(false)),
        ],
    },
    PolicyGroup {
        id: "telemetry",
        tag: "[TEL]",
        name: "Disable Telemetry",
        description: "Metrics, Reports, Feedback",
        policies: &[
            ("MetricsReportingEnabled", Bool(false)),
            ("DeviceMetricsReportingEnabled", Bool(false)),
            ("UrlKeyedAnonymizedDataCollectionEnabled", Bool(false)),
            ("UrlKeyedMetricsAllowed", Bool(false)),
            ("CloudProfileReportingEnabled", Bool(false)),
            ("CloudReportingEnabled", Bool(false)),
            ("ReportExtensionsAndPluginsData", Bool(false)),
            ("ReportMachineIDData", Bool(false)),
            ("ReportPolicyData", Bool(false)),
            ("ReportUserIDData", Bool(false)),
            ("ReportVersionData", Bool(false)),
            ("UserFeedbackAllowed", Bool(false)),
            ("FeedbackSurveysEnabled", Bool(false)),
        ],
    },
    PolicyGroup {
        id: "security",
        tag: "[SEC]",
        name: "Enhanced Security",
        description: "Safe Browsing, Updates",
        policies: &[
            ("SafeBrowsingProtectionLevel", Int(2)),
            ("SafeBrowsingExtendedReportingEnabled", Bool(false)),
            ("SafeBrowsingSurveysEnabled", Bool(false)),
            ("ComponentUpdatesEnabled", Bool(true)),
        ],
    },
    PolicyGroup {
        id: "autofill",
        tag: "[AUTO]",
        name: "Disable Autofill",
        description: "Passwords, Payments, Addresses",
        policies: &[
            ("PaymentMethodQueryEnabled", Bool(false)),
            ("AutofillAddressEnabled", Bool(false)),
            ("AutofillCreditCardEnabled", Bool(false)),
            ("AutofillPredictionSettings", Int(2)),
            ("PasswordManagerEnabled", Bool(false)),
            ("PasswordLeakDetectionEnabled", Bool(false)),
            ("PasswordSharingEnabled", Bool(false)),
        ],
    },
    PolicyGroup {
        id: "sync",
        tag: "[SYNC]",
        name: "Disable Sync",
        description: "No Cloud, No Sign-in",
        policies: &[("SyncDisabled", Bool(true)), ("BrowserSignin", Int(0))],
    },
    PolicyGroup {
        id: "perms",
        tag: "[PERM]",
        name: "Block Permissions",
        description: "Location, Notifications, USB",
        policies: &[
            ("DefaultGeolocationSetting", Int(2)),
            ("DefaultNotificationsSetting", Int(2)),
            ("DefaultWebBluetoothGuardSetting", Int(2)),
            ("DefaultWebUsbGuardSetting", Int(2)),
            ("DefaultFileSystemReadGuardSetting", Int(2)),
            ("DefaultFileSystemWriteGuardSetting", Int(2)),
            ("DefaultLocalFontsSetting", Int(2)),
            ("DefaultSensorsSetting", Int(2)),
            ("DefaultSerialGuardSetting", Int(2)),
            ("AutoplayAllowed", Bool(false)),
        ],
    },
    PolicyGroup {
        id: "brave",
        tag: "[BRAVE]",
        name: "Brave Specific",
        description: "Rewards, Wallet, VPN disabled",
        policies: &[
            ("BraveRewardsDisabled", Bool(true)),
            ("BraveWalletDisabled", Bool(true)),
            ("BraveVPNDisabled", Int(1)),
            ("TorDisabled", Bool(true)),
        ],
    },
];
