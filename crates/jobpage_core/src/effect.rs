/// A single requested side effect: one DOM write, or the stream connect.
///
/// The platform layer owns the actual DOM handles; effects are applied in
/// the order they are returned from [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append an alert banner to the alerts region.
    ShowAlert { text: String },
    /// Append one subscription row to the subscription list.
    AppendSubscription { name: String },
    /// Append the subscription count summary below the list.
    ShowSubscriptionSummary { text: String },
    /// Append a line of text to the job message region.
    AppendJobLine { text: String },
    /// Set the job progress bar width, e.g. `"50%"`.
    SetProgressWidth { width: String },
    /// Open the job stream socket at `url`.
    ConnectJobStream { url: String },
}
