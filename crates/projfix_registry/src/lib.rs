//! Registration manifest for the TaskSnap Xcode project.
//!
//! Holds the table of source files that exist in the working tree but are
//! not yet referenced by `TaskSnap.xcodeproj`, plus small helpers for the
//! PBX conventions the report uses. Nothing here reads or writes the
//! project file.

use serde::Serialize;

/// One file awaiting registration in the Xcode project.
///
/// `group` is the logical Xcode group path, not a filesystem path; for
/// TaskSnap the two coincide, but nothing requires it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRegistration {
    /// Path relative to the project root, e.g. `TaskSnap/Views/LaunchScreen.swift`
    pub path: &'static str,
    /// PBX file type tag, e.g. `sourcecode.swift`. Never validated.
    pub file_type: &'static str,
    /// Xcode group path segments, outermost first
    pub group: &'static [&'static str],
}

impl FileRegistration {
    /// Group path joined with `/` for display.
    pub fn group_path(&self) -> String {
        self.group.join("/")
    }
}

/// Generate an object id in Xcode's PBX format: 24 uppercase hex chars.
pub fn pbx_object_id() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    hex[..24].to_string()
}

const VIEWS: &[&str] = &["TaskSnap", "Views"];
const SERVICES: &[&str] = &["TaskSnap", "Services"];
const UTILS: &[&str] = &["TaskSnap", "Utils"];
const VIEW_MODELS: &[&str] = &["TaskSnap", "ViewModels"];
const MODELS: &[&str] = &["TaskSnap", "Models"];

const fn swift_source(
    path: &'static str,
    group: &'static [&'static str],
) -> FileRegistration {
    FileRegistration {
        path,
        file_type: "sourcecode.swift",
        group,
    }
}

/// Files added to the working tree but missing from `TaskSnap.xcodeproj`,
/// in the order they should appear in the report.
pub const PENDING_REGISTRATIONS: &[FileRegistration] = &[
    // Views
    swift_source("TaskSnap/Views/LaunchScreen.swift", VIEWS),
    swift_source("TaskSnap/Views/AnimationView.swift", VIEWS),
    swift_source("TaskSnap/Views/AnimationSettingsView.swift", VIEWS),
    swift_source("TaskSnap/Views/PatternInsightsView.swift", VIEWS),
    swift_source("TaskSnap/Views/SpaceDetailView.swift", VIEWS),
    swift_source("TaskSnap/Views/SharedSpacesListView.swift", VIEWS),
    swift_source("TaskSnap/Views/BackupRestoreView.swift", VIEWS),
    swift_source("TaskSnap/Views/ClutterScoreView.swift", VIEWS),
    swift_source("TaskSnap/Views/AnalyticsView.swift", VIEWS),
    swift_source("TaskSnap/Views/BodyDoublingRoomView.swift", VIEWS),
    swift_source("TaskSnap/Views/ThemePickerView.swift", VIEWS),
    swift_source("TaskSnap/Views/LoadingView.swift", VIEWS),
    swift_source("TaskSnap/Views/ErrorStateView.swift", VIEWS),
    // Services
    swift_source("TaskSnap/Services/SoundEffectManager.swift", SERVICES),
    swift_source("TaskSnap/Services/FocusSoundManager.swift", SERVICES),
    swift_source("TaskSnap/Services/PatternRecognitionService.swift", SERVICES),
    swift_source("TaskSnap/Services/ShareManager.swift", SERVICES),
    swift_source("TaskSnap/Services/TaskSuggestionService.swift", SERVICES),
    swift_source("TaskSnap/Services/BackupService.swift", SERVICES),
    swift_source("TaskSnap/Services/SmartCategoryService.swift", SERVICES),
    swift_source("TaskSnap/Services/ClutterScoreService.swift", SERVICES),
    swift_source("TaskSnap/Services/BodyDoublingManager.swift", SERVICES),
    swift_source("TaskSnap/Services/ThemeManager.swift", SERVICES),
    swift_source("TaskSnap/Services/NotificationManager.swift", SERVICES),
    swift_source("TaskSnap/Services/SyncManager.swift", SERVICES),
    // Utils
    swift_source("TaskSnap/Utils/PressableButton.swift", UTILS),
    swift_source("TaskSnap/Utils/AnimatedToggle.swift", UTILS),
    swift_source("TaskSnap/Utils/AccessibilitySettings.swift", UTILS),
    swift_source("TaskSnap/Utils/DynamicTypeModifier.swift", UTILS),
    swift_source("TaskSnap/Utils/HighContrastColors.swift", UTILS),
    // ViewModels
    swift_source("TaskSnap/ViewModels/AnalyticsViewModel.swift", VIEW_MODELS),
    // Models
    swift_source("TaskSnap/Models/FocusSession.swift", MODELS),
    swift_source("TaskSnap/Models/CelebrationTheme.swift", MODELS),
];
