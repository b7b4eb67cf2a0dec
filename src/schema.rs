//! Built-in option catalog
//!
//! This module holds the fixed schema every profile starts from: one entry
//! per built-in option, in registration order, so an option's identifier is
//! simply its position in [`BUILT_IN_OPTIONS`]. The registry builds its
//! name lookup from this table once at construction.
//!
//! Names are hierarchical and slash-delimited (`Browser/HomePage`); the
//! segment before the first slash doubles as the section name in
//! `otter.conf`. Historical spellings are kept as-is (for example
//! `Sessions/OptionsExludedFromInheriting`) because they are the keys real
//! profiles have on disk.
//!
//! The three `Paths/*` defaults are machine-dependent and left empty here;
//! the registry fills them in from the platform download/home directories.

use crate::types::{OptionType, SettingValue};

use self::OptionType as T;
use self::SchemaDefault as D;

/// Compile-time representation of a built-in default value
#[derive(Debug, Clone, Copy)]
pub(crate) enum SchemaDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
    List(&'static [&'static str]),
}

impl SchemaDefault {
    /// Materialize the default as a runtime value
    pub(crate) fn to_value(self) -> SettingValue {
        match self {
            D::Bool(v) => SettingValue::Bool(v),
            D::Int(v) => SettingValue::Int(v),
            D::Str(v) => SettingValue::String(v.to_string()),
            D::List(items) => SettingValue::List(items.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn matches(self, kind: OptionType) -> bool {
        kind.accepts(&self.to_value())
    }
}

/// One built-in option: canonical name, declared type, default and the legal
/// choices for constrained enumerations
#[derive(Debug, Clone, Copy)]
pub(crate) struct SchemaEntry {
    pub(crate) name: &'static str,
    pub(crate) kind: OptionType,
    pub(crate) default: SchemaDefault,
    pub(crate) choices: &'static [&'static str],
}

const fn entry(
    name: &'static str,
    kind: OptionType,
    default: SchemaDefault,
    choices: &'static [&'static str],
) -> SchemaEntry {
    SchemaEntry {
        name,
        kind,
        default,
        choices,
    }
}

/// The complete built-in schema, in identifier order
pub(crate) const BUILT_IN_OPTIONS: &[SchemaEntry] = &[
    entry("AddressField/CompletionDisplayMode", T::Enumeration, D::Str("compact"), &["compact", "columns"]),
    entry("AddressField/CompletionMode", T::Enumeration, D::Str("inlineAndPopup"), &["none", "inline", "popup", "inlineAndPopup"]),
    entry("AddressField/DropAction", T::Enumeration, D::Str("replace"), &["replace", "paste", "pasteAndGo"]),
    entry("AddressField/HostLookupTimeout", T::Integer, D::Int(200), &[]),
    entry("AddressField/Layout", T::List, D::List(&["websiteInformation", "address", "fillPassword", "loadPlugins", "listFeeds", "bookmark", "historyDropdown"]), &[]),
    entry("AddressField/PasteAndGoOnMiddleClick", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/SelectAllOnFocus", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/ShowCompletionCategories", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/SuggestBookmarks", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/SuggestHistory", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/SuggestLocalPaths", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/SuggestSearch", T::Boolean, D::Bool(true), &[]),
    entry("AddressField/SuggestSpecialPages", T::Boolean, D::Bool(true), &[]),
    entry("Backends/Passwords", T::Enumeration, D::Str("file"), &["file"]),
    entry("Backends/Web", T::Enumeration, D::Str("qtwebkit"), &["qtwebkit"]),
    entry("Browser/AlwaysAskWhereToSaveDownload", T::Boolean, D::Bool(true), &[]),
    entry("Browser/DelayRestoringOfBackgroundTabs", T::Boolean, D::Bool(true), &[]),
    entry("Browser/EnableMouseGestures", T::Boolean, D::Bool(true), &[]),
    entry("Browser/EnableSingleKeyShortcuts", T::Boolean, D::Bool(true), &[]),
    entry("Browser/EnableSpellCheck", T::Boolean, D::Bool(true), &[]),
    entry("Browser/EnableTrayIcon", T::Boolean, D::Bool(true), &[]),
    entry("Browser/HomePage", T::String, D::Str(""), &[]),
    entry("Browser/InactiveTabTimeUntilSuspend", T::Integer, D::Int(-1), &[]),
    entry("Browser/KeyboardShortcutsProfilesOrder", T::List, D::List(&["platform", "default"]), &[]),
    entry("Browser/Locale", T::String, D::Str("system"), &[]),
    entry("Browser/Migrations", T::List, D::List(&[]), &[]),
    entry("Browser/MouseProfilesOrder", T::List, D::List(&["default"]), &[]),
    entry("Browser/OfflineStorageLimit", T::Integer, D::Int(10240), &[]),
    entry("Browser/OfflineWebApplicationCacheLimit", T::Integer, D::Int(10240), &[]),
    entry("Browser/OpenLinksInNewTab", T::Boolean, D::Bool(true), &[]),
    entry("Browser/PrintElementBackgrounds", T::Boolean, D::Bool(true), &[]),
    entry("Browser/PrivateMode", T::Boolean, D::Bool(false), &[]),
    entry("Browser/RememberPasswords", T::Boolean, D::Bool(false), &[]),
    entry("Browser/ReuseCurrentTab", T::Boolean, D::Bool(false), &[]),
    entry("Browser/ShowSelectionContextMenuOnDoubleClick", T::Boolean, D::Bool(false), &[]),
    entry("Browser/SpellCheckDictionary", T::String, D::Str(""), &[]),
    entry("Browser/StartupBehavior", T::Enumeration, D::Str("continuePrevious"), &["continuePrevious", "showDialog", "startHomePage", "startStartPage", "startEmpty"]),
    entry("Browser/ToolTipsMode", T::Enumeration, D::Str("extended"), &["disabled", "standard", "extended"]),
    entry("Browser/TransferStartingAction", T::Enumeration, D::Str("openTab"), &["openTab", "openBackgroundTab", "openPanel", "doNothing"]),
    entry("Browser/ValidatorsOrder", T::List, D::List(&["w3c-markup", "w3c-css"]), &[]),
    entry("Cache/DiskCacheLimit", T::Integer, D::Int(51200), &[]),
    entry("Cache/PagesInMemoryLimit", T::Integer, D::Int(5), &[]),
    entry("Choices/WarnFormResend", T::Boolean, D::Bool(true), &[]),
    entry("Choices/WarnLowDiskSpace", T::Enumeration, D::Str("warn"), &["warn", "continueReadOnly", "continueReadWrite"]),
    entry("Choices/WarnOpenBookmarkFolder", T::Boolean, D::Bool(true), &[]),
    entry("Choices/WarnOpenMultipleDroppedUrls", T::Boolean, D::Bool(true), &[]),
    entry("Choices/WarnQuit", T::Enumeration, D::Str("noWarn"), &["alwaysWarn", "warnOpenTabs", "noWarn"]),
    entry("Choices/WarnQuitTransfers", T::Boolean, D::Bool(true), &[]),
    entry("Content/BackgroundColor", T::Color, D::Str("#FFFFFF"), &[]),
    entry("Content/CursiveFont", T::Font, D::Str("Impact"), &[]),
    entry("Content/DefaultCharacterEncoding", T::String, D::Str("auto"), &[]),
    entry("Content/DefaultFixedFontSize", T::Integer, D::Int(16), &[]),
    entry("Content/DefaultFontSize", T::Integer, D::Int(16), &[]),
    entry("Content/DefaultZoom", T::Integer, D::Int(100), &[]),
    entry("Content/FantasyFont", T::Font, D::Str("Comic Sans MS"), &[]),
    entry("Content/FixedFont", T::Font, D::Str("DejaVu Sans Mono"), &[]),
    entry("Content/LinkColor", T::Color, D::Str("#0000EE"), &[]),
    entry("Content/MinimumFontSize", T::Integer, D::Int(-1), &[]),
    entry("Content/PageReloadTime", T::Integer, D::Int(-1), &[]),
    entry("Content/SansSerifFont", T::Font, D::Str("DejaVu Sans"), &[]),
    entry("Content/SerifFont", T::Font, D::Str("DejaVu Serif"), &[]),
    entry("Content/StandardFont", T::Font, D::Str("DejaVu Serif"), &[]),
    entry("Content/TextColor", T::Color, D::Str("#000000"), &[]),
    entry("Content/UserStyleSheet", T::Path, D::Str(""), &[]),
    entry("Content/VisitedLinkColor", T::Color, D::Str("#551A8B"), &[]),
    entry("Content/ZoomTextOnly", T::Boolean, D::Bool(false), &[]),
    entry("ContentBlocking/CosmeticFiltersMode", T::Enumeration, D::Str("all"), &["all", "domainOnly", "none"]),
    entry("ContentBlocking/EnableContentBlocking", T::Boolean, D::Bool(true), &[]),
    entry("ContentBlocking/EnableWildcards", T::Boolean, D::Bool(true), &[]),
    entry("ContentBlocking/Profiles", T::List, D::List(&[]), &[]),
    entry("History/BrowsingLimitAmountGlobal", T::Integer, D::Int(1000), &[]),
    entry("History/BrowsingLimitAmountWindow", T::Integer, D::Int(50), &[]),
    entry("History/BrowsingLimitPeriod", T::Integer, D::Int(30), &[]),
    entry("History/ClearOnClose", T::List, D::List(&[]), &[]),
    entry("History/DownloadsLimitPeriod", T::Integer, D::Int(7), &[]),
    entry("History/ExpandBranches", T::Enumeration, D::Str("first"), &["first", "all", "none"]),
    entry("History/ManualClearOptions", T::List, D::List(&["browsing", "cookies", "forms", "downloads", "caches"]), &[]),
    entry("History/ManualClearPeriod", T::Integer, D::Int(1), &[]),
    entry("History/RememberBrowsing", T::Boolean, D::Bool(true), &[]),
    entry("History/RememberClosedPrivateTabs", T::Boolean, D::Bool(false), &[]),
    entry("History/RememberDownloads", T::Boolean, D::Bool(true), &[]),
    entry("History/StoreFavicons", T::Boolean, D::Bool(true), &[]),
    entry("Interface/DateTimeFormat", T::String, D::Str(""), &[]),
    entry("Interface/EnableSmoothScrolling", T::Boolean, D::Bool(false), &[]),
    entry("Interface/IconThemePath", T::Path, D::Str(""), &[]),
    entry("Interface/LastTabClosingAction", T::Enumeration, D::Str("openTab"), &["openTab", "closeWindow", "closeWindowIfNotLast", "doNothing"]),
    entry("Interface/LockToolBars", T::Boolean, D::Bool(false), &[]),
    entry("Interface/NewTabOpeningAction", T::Enumeration, D::Str("maximizeTab"), &["doNothing", "maximizeTab", "cascadeAll", "tileAll"]),
    entry("Interface/NotificationVisibilityDuration", T::Integer, D::Int(5), &[]),
    entry("Interface/ShowScrollBars", T::Boolean, D::Bool(true), &[]),
    entry("Interface/ShowSizeGrip", T::Boolean, D::Bool(true), &[]),
    entry("Interface/StyleSheet", T::Path, D::Str(""), &[]),
    entry("Interface/TabCrashingAction", T::Enumeration, D::Str("ask"), &["ask", "close", "reload"]),
    entry("Interface/UseFancyDateTimeFormat", T::Boolean, D::Bool(true), &[]),
    entry("Interface/UseNativeNotifications", T::Boolean, D::Bool(true), &[]),
    entry("Interface/UseSystemIconTheme", T::Boolean, D::Bool(false), &[]),
    entry("Interface/WidgetStyle", T::String, D::Str(""), &[]),
    entry("Network/AcceptLanguage", T::String, D::Str("system,*;q=0.9"), &[]),
    entry("Network/CookiesKeepMode", T::Enumeration, D::Str("keepUntilExpires"), &["keepUntilExpires", "keepUntilExit", "ask"]),
    entry("Network/CookiesPolicy", T::Enumeration, D::Str("acceptAll"), &["acceptAll", "acceptExisting", "readOnly", "ignore"]),
    entry("Network/DoNotTrackPolicy", T::Enumeration, D::Str("skip"), &["skip", "allow", "doNotAllow"]),
    entry("Network/EnableReferrer", T::Boolean, D::Bool(true), &[]),
    entry("Network/Proxy", T::Enumeration, D::Str("system"), &["system"]),
    entry("Network/ThirdPartyCookiesAcceptedHosts", T::List, D::List(&[]), &[]),
    entry("Network/ThirdPartyCookiesPolicy", T::Enumeration, D::Str("acceptAll"), &["acceptAll", "acceptExisting", "ignore"]),
    entry("Network/ThirdPartyCookiesRejectedHosts", T::List, D::List(&[]), &[]),
    entry("Network/UserAgent", T::Enumeration, D::Str("default"), &["default"]),
    entry("Network/WorkOffline", T::Boolean, D::Bool(false), &[]),
    entry("Paths/Downloads", T::Path, D::Str(""), &[]),
    entry("Paths/OpenFile", T::Path, D::Str(""), &[]),
    entry("Paths/SaveFile", T::Path, D::Str(""), &[]),
    entry("Permissions/EnableFullScreen", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableGeolocation", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableImages", T::Enumeration, D::Str("enabled"), &["enabled", "onlyCached", "disabled"]),
    entry("Permissions/EnableJavaScript", T::Boolean, D::Bool(true), &[]),
    entry("Permissions/EnableLocalStorage", T::Boolean, D::Bool(true), &[]),
    entry("Permissions/EnableMediaCaptureAudio", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableMediaCaptureVideo", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableMediaPlaybackAudio", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableNotifications", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableOfflineStorageDatabase", T::Boolean, D::Bool(false), &[]),
    entry("Permissions/EnableOfflineWebApplicationCache", T::Boolean, D::Bool(false), &[]),
    entry("Permissions/EnablePlugins", T::Enumeration, D::Str("onDemand"), &["enabled", "onDemand", "disabled"]),
    entry("Permissions/EnablePointerLock", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/EnableWebgl", T::Boolean, D::Bool(true), &[]),
    entry("Permissions/ScriptsCanAccessClipboard", T::Boolean, D::Bool(false), &[]),
    entry("Permissions/ScriptsCanChangeWindowGeometry", T::Boolean, D::Bool(true), &[]),
    entry("Permissions/ScriptsCanCloseSelfOpenedWindows", T::Boolean, D::Bool(true), &[]),
    entry("Permissions/ScriptsCanCloseWindows", T::Enumeration, D::Str("ask"), &["ask", "allow", "disallow"]),
    entry("Permissions/ScriptsCanOpenWindows", T::Enumeration, D::Str("ask"), &["ask", "blockAll", "openAll", "openAllInBackground"]),
    entry("Permissions/ScriptsCanReceiveRightClicks", T::Boolean, D::Bool(true), &[]),
    entry("Permissions/ScriptsCanShowStatusMessages", T::Boolean, D::Bool(false), &[]),
    entry("Search/DefaultQuickSearchEngine", T::Enumeration, D::Str("duckduckgo"), &["duckduckgo"]),
    entry("Search/DefaultSearchEngine", T::Enumeration, D::Str("duckduckgo"), &["duckduckgo"]),
    entry("Search/EnableFindInPageAsYouType", T::Boolean, D::Bool(true), &[]),
    entry("Search/ReuseLastQuickFindQuery", T::Boolean, D::Bool(false), &[]),
    entry("Search/SearchEnginesOrder", T::List, D::List(&["duckduckgo", "wikipedia", "startpage", "google", "yahoo", "bing", "youtube"]), &[]),
    entry("Search/SearchEnginesSuggestions", T::Boolean, D::Bool(false), &[]),
    entry("Security/AllowMixedContent", T::Boolean, D::Bool(false), &[]),
    entry("Security/Ciphers", T::List, D::List(&["default"]), &[]),
    entry("Security/IgnoreSslErrors", T::List, D::List(&[]), &[]),
    entry("Sessions/OpenInExistingWindow", T::Boolean, D::Bool(false), &[]),
    entry("Sessions/OptionsExludedFromInheriting", T::List, D::List(&["Content/PageReloadTime"]), &[]),
    entry("Sessions/OptionsExludedFromSaving", T::List, D::List(&[]), &[]),
    entry("SourceViewer/ShowLineNumbers", T::Boolean, D::Bool(true), &[]),
    entry("SourceViewer/WrapLines", T::Boolean, D::Bool(false), &[]),
    entry("StartPage/BackgroundColor", T::Color, D::Str(""), &[]),
    entry("StartPage/BackgroundMode", T::Enumeration, D::Str("standard"), &["standard", "bestFit", "center", "stretch", "tile"]),
    entry("StartPage/BackgroundPath", T::String, D::Str(""), &[]),
    entry("StartPage/BookmarksFolder", T::String, D::Str("/Start Page/"), &[]),
    entry("StartPage/EnableStartPage", T::Boolean, D::Bool(true), &[]),
    entry("StartPage/ShowAddTile", T::Boolean, D::Bool(true), &[]),
    entry("StartPage/ShowSearchField", T::Boolean, D::Bool(true), &[]),
    entry("StartPage/TileBackgroundMode", T::Enumeration, D::Str("thumbnail"), &["none", "thumbnail", "favicon"]),
    entry("StartPage/TileHeight", T::Integer, D::Int(190), &[]),
    entry("StartPage/TileWidth", T::Integer, D::Int(270), &[]),
    entry("StartPage/TilesPerRow", T::Integer, D::Int(0), &[]),
    entry("StartPage/ZoomLevel", T::Integer, D::Int(100), &[]),
    entry("TabBar/EnablePreviews", T::Boolean, D::Bool(true), &[]),
    entry("TabBar/EnableThumbnails", T::Boolean, D::Bool(false), &[]),
    entry("TabBar/MaximumTabHeight", T::Integer, D::Int(-1), &[]),
    entry("TabBar/MinimumTabHeight", T::Integer, D::Int(-1), &[]),
    entry("TabBar/MaximumTabWidth", T::Integer, D::Int(250), &[]),
    entry("TabBar/MinimumTabWidth", T::Integer, D::Int(-1), &[]),
    entry("TabBar/OpenNextToActive", T::Boolean, D::Bool(true), &[]),
    entry("TabBar/PreviewsAnimationDuration", T::Integer, D::Int(250), &[]),
    entry("TabBar/RequireModifierToSwitchTabOnScroll", T::Boolean, D::Bool(true), &[]),
    entry("TabBar/ShowCloseButton", T::Boolean, D::Bool(true), &[]),
    entry("TabBar/ShowUrlIcon", T::Boolean, D::Bool(true), &[]),
    entry("Updates/ActiveChannels", T::List, D::List(&[]), &[]),
    entry("Updates/AutomaticInstall", T::Boolean, D::Bool(false), &[]),
    entry("Updates/CheckInterval", T::Integer, D::Int(7), &[]),
    entry("Updates/LastCheck", T::String, D::Str(""), &[]),
    entry("Updates/ServerUrl", T::String, D::Str("https://www.otter-browser.org/updates/update.json"), &[]),
];
