#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page DOM is ready; render the static regions and connect the stream.
    PageReady,
    /// Job stream socket finished its handshake.
    StreamOpened,
    /// One inbound frame from the job stream, as text.
    StreamFrame(String),
    /// Job stream socket closed, by the remote end or the network.
    StreamClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
