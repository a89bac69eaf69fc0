//! Shared test doubles for the network, browser, and alert seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use reqwest::blocking::Request;
use reqwest::StatusCode;

use crate::api::{ApiError, Transport};
use crate::host::{AlertSink, AlertStyle, BrowserOpener, WindowRef};

/// Transport answering every request with a fixed status, counting calls.
#[derive(Clone)]
pub struct StubTransport {
    status: u16,
    calls: Rc<Cell<usize>>,
}

impl StubTransport {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for StubTransport {
    fn execute(&self, _request: Request) -> Result<StatusCode, ApiError> {
        self.calls.set(self.calls.get() + 1);
        Ok(StatusCode::from_u16(self.status).expect("stub status must be valid"))
    }
}

/// Transport simulating a connection failure.
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn execute(&self, _request: Request) -> Result<StatusCode, ApiError> {
        // A builder error is the only reqwest::Error constructible offline.
        let error = reqwest::blocking::Client::new()
            .get("http://")
            .build()
            .expect_err("an empty host must not build");
        Err(ApiError::Network(error))
    }
}

/// Browser stub with a fixed verdict, recording every URL it is handed.
pub struct StubBrowser {
    accept: bool,
    opened: RefCell<Vec<String>>,
}

impl StubBrowser {
    pub fn new(accept: bool) -> Self {
        Self {
            accept,
            opened: RefCell::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl BrowserOpener for StubBrowser {
    fn open_url(&self, url: &str) -> bool {
        self.opened.borrow_mut().push(url.to_string());
        self.accept
    }
}

/// Alert sink recording every presented alert.
#[derive(Default)]
pub struct RecordingAlertSink {
    pub alerts: Vec<RecordedAlert>,
}

pub struct RecordedAlert {
    pub window: WindowRef,
    pub summary: String,
    pub explanation: String,
    pub style: AlertStyle,
}

impl AlertSink for RecordingAlertSink {
    fn present_message_off_window(
        &mut self,
        window: WindowRef,
        summary: &str,
        explanation: &str,
        style: AlertStyle,
    ) {
        self.alerts.push(RecordedAlert {
            window,
            summary: summary.to_string(),
            explanation: explanation.to_string(),
            style,
        });
    }
}
