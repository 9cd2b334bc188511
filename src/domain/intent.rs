//! UI events expressed as intents, and the effects the controller answers with.

use super::confetti::ConfettiPlan;
use super::entities::{ChatMessage, LoanApplication};
use super::view::ResultView;
use std::path::PathBuf;

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SubmitApplication(LoanApplication),
    DownloadReport,
    ToggleChat,
    CloseChat,
    /// The auto-popup delay has run out.
    PopupElapsed,
    SendChat(String),
}

/// Something the front-end must do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Submit button disabled + loader shown (true) or restored (false).
    SubmitBusy(bool),
    ShowResult(ResultView),
    Celebrate(ConfettiPlan),
    Alert(String),
    DownloadBusy(bool),
    ReportSaved(PathBuf),
    ChatOpened,
    ChatClosed,
    FocusChatInput,
    AppendChat(ChatMessage),
    TypingStarted,
    TypingStopped,
}
