//! Interaction controller: one request in, one rendered response out.
//!
//! The core is a pure function over a [`Request`]; the port traits let the
//! interactive loop run against stdin/stdout in production and plain
//! vectors in tests.

use std::io;

use crate::core::mode::Mode;
use crate::core::render;
use crate::core::task::Task;
use crate::core::transform;

/// Shown instead of a transformation when the input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text.";

/// One transformation request: raw text plus task and mode wire codes.
#[derive(Debug, Clone)]
pub struct Request {
    pub text: String,
    pub task: String,
    pub mode: String,
}

/// Transformed text for a request, before rendering. Blank input
/// short-circuits to the placeholder without touching the transformer;
/// unknown task codes pass the text through unchanged.
pub fn transform_text(req: &Request) -> String {
    if req.text.trim().is_empty() {
        return EMPTY_INPUT_MESSAGE.to_string();
    }
    match Task::from_code(&req.task) {
        Some(task) => {
            log::debug!("task={} input_len={}", req.task, req.text.len());
            transform::apply(task, &req.text)
        }
        None => {
            log::warn!("unknown task code {:?}, passing text through", req.task);
            req.text.clone()
        }
    }
}

/// Full response: transform, then render with the mode label.
pub fn respond(req: &Request) -> String {
    let mode = Mode::from_code(&req.mode);
    if mode.is_none() {
        log::warn!("unknown mode code {:?}, rendering without label", req.mode);
    }
    render::render(mode, &transform_text(req))
}

/// Source of requests for the request/response loop.
pub trait InputPort {
    /// Next request, or `None` when the source is exhausted.
    fn next_request(&mut self) -> io::Result<Option<Request>>;
}

/// Destination for rendered responses.
pub trait OutputPort {
    fn present(&mut self, html: &str) -> io::Result<()>;
}

/// Drives the request/response loop over injected ports.
pub struct Controller<I, O> {
    input: I,
    output: O,
}

impl<I: InputPort, O: OutputPort> Controller<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Controller { input, output }
    }

    /// Run until the input port is exhausted. Returns the number of
    /// requests handled.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut handled = 0;
        while let Some(req) = self.input.next_request()? {
            let html = respond(&req);
            self.output.present(&html)?;
            handled += 1;
        }
        Ok(handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str, task: &str, mode: &str) -> Request {
        Request {
            text: text.to_string(),
            task: task.to_string(),
            mode: mode.to_string(),
        }
    }

    #[test]
    fn blank_input_short_circuits_to_placeholder() {
        for text in ["", "   ", "\n\t "] {
            let out = respond(&request(text, "correct", "1"));
            assert_eq!(
                out,
                "<strong>Professional:</strong><div class=\"result\">Please enter some text.</div>"
            );
        }
    }

    #[test]
    fn unknown_task_passes_text_through() {
        let out = respond(&request("hello <world>", "translate", "2"));
        assert_eq!(
            out,
            "<strong>Casual:</strong><div class=\"result\">hello &lt;world&gt;</div>"
        );
    }

    #[test]
    fn known_task_is_applied() {
        let out = transform_text(&request("i am teh best.", "correct", "1"));
        assert_eq!(out, "I am the best.");
    }

    #[test]
    fn unknown_mode_renders_without_label() {
        let out = respond(&request("hi.", "summarize", "9"));
        assert_eq!(out, "<div class=\"result\">hi.</div>");
    }

    struct VecInput(Vec<Request>);

    impl InputPort for VecInput {
        fn next_request(&mut self) -> io::Result<Option<Request>> {
            if self.0.is_empty() {
                Ok(None)
            } else {
                Ok(Some(self.0.remove(0)))
            }
        }
    }

    struct VecOutput(Vec<String>);

    impl OutputPort for VecOutput {
        fn present(&mut self, html: &str) -> io::Result<()> {
            self.0.push(html.to_string());
            Ok(())
        }
    }

    #[test]
    fn loop_emits_one_response_per_request_in_order() {
        let input = VecInput(vec![
            request("One. Two. Three.", "summarize", "1"),
            request("", "summarize", "1"),
            request("A. B. C.", "convert", "6"),
        ]);
        let mut controller = Controller::new(input, VecOutput(Vec::new()));
        let handled = controller.run().expect("vector ports cannot fail");
        assert_eq!(handled, 3);
        let outputs = &controller.output.0;
        assert_eq!(
            outputs[0],
            "<strong>Professional:</strong><div class=\"result\">One. Two.</div>"
        );
        assert_eq!(
            outputs[1],
            "<strong>Professional:</strong><div class=\"result\">Please enter some text.</div>"
        );
        assert_eq!(
            outputs[2],
            "<strong>Quick Answer:</strong><div class=\"result\">1. A.<br>2. B.<br>3. C.</div>"
        );
    }
}
