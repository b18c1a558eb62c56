//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use storefront_core::{LifecyclePhase, TimingContext};

use crate::error::StreamError;
use crate::section::Section;
use crate::shell::Shell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell sent, sections can be streamed.
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying sink so it works with Spin's outgoing body
/// as well as an in-memory channel.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(StreamError::ShellAlreadySent),
            SinkState::Completed => return Err(StreamError::Completed),
        }

        self.timing.mark("shell_start");
        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Sections go out in call order.
    pub async fn send_section(&mut self, section: &Section) -> Result<(), StreamError> {
        self.ensure_streaming()?;

        self.timing.mark_section_start(&section.name);
        self.write(&section.html).await?;
        self.timing.mark_section_sent(&section.name);
        self.sections_sent.push(section.name.clone());

        Ok(())
    }

    /// Send the closing HTML and complete the response.
    pub async fn finish(&mut self, closing: &str) -> Result<(), StreamError> {
        self.ensure_streaming()?;
        self.write(closing).await?;
        self.complete()
    }

    /// Stream a whole page: shell opening, every section, shell closing.
    pub async fn stream_page(&mut self, shell: &Shell, sections: &[Section]) -> Result<(), StreamError> {
        self.send_shell(&shell.render_opening()).await?;
        for section in sections {
            self.send_section(section).await?;
        }
        self.finish(&shell.render_closing()).await
    }

    /// Mark the response complete without writing anything further.
    pub fn complete(&mut self) -> Result<(), StreamError> {
        if self.state == SinkState::Initial {
            return Err(StreamError::ShellNotSent);
        }
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(name)) => LifecyclePhase::SectionSent(name.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_streaming(&self) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => Err(StreamError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Completed => Err(StreamError::Completed),
        }
    }

    async fn write(&mut self, html: &str) -> Result<(), StreamError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Write(e.to_string()))?;
        self.bytes_sent += html.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::HeadContent;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    fn collect(rx: mpsc::UnboundedReceiver<Vec<u8>>) -> String {
        let chunks: Vec<Vec<u8>> = block_on(rx.collect());
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[test]
    fn test_stream_page_in_order() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());
        let shell = Shell::new(HeadContent::new("Home"));
        let sections = vec![
            Section::new("hero", "<section id=\"hero\"></section>"),
            Section::new("shop", "<section id=\"shop\"></section>"),
        ];

        block_on(sink.stream_page(&shell, &sections)).unwrap();

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert_eq!(sink.sections_sent(), &["hero".to_string(), "shop".to_string()]);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().has_mark("section_shop_sent"));

        let sent = sink.bytes_sent();
        drop(sink.into_inner());
        let body = collect(rx);
        assert_eq!(body.len(), sent);

        let hero = body.find("id=\"hero\"").unwrap();
        let shop = body.find("id=\"shop\"").unwrap();
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(hero < shop);
        assert!(body.ends_with("</html>"));
    }

    #[test]
    fn test_section_before_shell_fails() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let result = block_on(sink.send_section(&Section::new("hero", "<p></p>")));
        assert_eq!(result, Err(StreamError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
        assert_eq!(sink.complete(), Err(StreamError::ShellNotSent));
    }

    #[test]
    fn test_shell_twice_and_after_completion() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(sink.send_shell("<html>")).unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
        assert_eq!(block_on(sink.send_shell("<html>")), Err(StreamError::ShellAlreadySent));

        block_on(sink.send_section(&Section::new("faq", "<details></details>"))).unwrap();
        assert_eq!(sink.phase(), LifecyclePhase::SectionSent("faq".to_string()));

        block_on(sink.finish("</html>")).unwrap();
        assert_eq!(
            block_on(sink.send_section(&Section::new("late", ""))),
            Err(StreamError::Completed)
        );
    }

    #[test]
    fn test_closed_channel_reports_write_error() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        drop(rx);
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let result = block_on(sink.send_shell("<html>"));
        assert!(matches!(result, Err(StreamError::Write(_))));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }
}
