#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use endpoint_groups::{Endpoint, EndpointGroup, RouteBuilder};

/// Something the recording router observed, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Group(String),
    Map {
        path: String,
        handler: &'static str,
        policies: Vec<String>,
    },
    Mount(String),
}

/// Route builder that records every call into a shared log
#[derive(Debug, Clone, Default)]
pub struct RecordingRouter {
    prefix: String,
    policies: Vec<String>,
    log: Arc<Mutex<Vec<Event>>>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// A copy of this builder carrying an extra policy
    pub fn with_policy(&self, policy: &str) -> Self {
        let mut next = self.clone();
        next.policies.push(policy.to_string());
        next
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.lock().unwrap().clone()
    }

    /// Handler labels in the order they were mapped
    pub fn mapped(&self) -> Vec<&'static str> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Map { handler, .. } => Some(handler),
                _ => None,
            })
            .collect()
    }

    /// Full paths in the order they were mapped
    pub fn paths(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Map { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.log.lock().unwrap().push(event);
    }
}

fn join(prefix: &str, segment: &str) -> String {
    let segment = segment.trim_matches('/');
    match (prefix.is_empty(), segment.is_empty()) {
        (_, true) => prefix.to_string(),
        (true, false) => format!("/{segment}"),
        (false, false) => format!("{prefix}/{segment}"),
    }
}

impl RouteBuilder for RecordingRouter {
    type Handler = &'static str;

    fn map(self, pattern: &str, handler: &'static str) -> Self {
        let path = join(&self.prefix, pattern);
        let path = if path.is_empty() { "/".to_string() } else { path };
        self.record(Event::Map {
            path,
            handler,
            policies: self.policies.clone(),
        });
        self
    }

    fn group(&self, prefix: &str) -> Self {
        let child = Self {
            prefix: join(&self.prefix, prefix),
            policies: self.policies.clone(),
            log: self.log.clone(),
        };
        self.record(Event::Group(child.prefix.clone()));
        child
    }

    fn mount(self, group: Self) -> Self {
        self.record(Event::Mount(group.prefix));
        self
    }
}

pub struct TestEndpoint {
    pub group: Option<&'static str>,
    pub path: &'static str,
    pub label: &'static str,
}

impl TestEndpoint {
    pub fn grouped(group: &'static str, path: &'static str, label: &'static str) -> Self {
        Self {
            group: Some(group),
            path,
            label,
        }
    }

    pub fn root(path: &'static str, label: &'static str) -> Self {
        Self {
            group: None,
            path,
            label,
        }
    }
}

impl Endpoint<RecordingRouter> for TestEndpoint {
    fn group_name(&self) -> Option<&str> {
        self.group
    }

    fn map(&self, router: RecordingRouter) -> RecordingRouter {
        router.map(self.path, self.label)
    }
}

pub struct TestGroup {
    pub name: &'static str,
    pub prefix: Option<&'static str>,
    pub policy: Option<&'static str>,
    pub configured: Arc<AtomicUsize>,
}

impl TestGroup {
    pub fn new(name: &'static str, prefix: Option<&'static str>) -> Self {
        Self {
            name,
            prefix,
            policy: None,
            configured: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_policy(mut self, policy: &'static str) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn configure_count(&self) -> Arc<AtomicUsize> {
        self.configured.clone()
    }
}

impl EndpointGroup<RecordingRouter> for TestGroup {
    fn name(&self) -> &str {
        self.name
    }

    fn route_prefix(&self) -> Option<&str> {
        self.prefix
    }

    fn configure(&self, group: RecordingRouter) -> RecordingRouter {
        self.configured.fetch_add(1, Ordering::SeqCst);
        match self.policy {
            Some(policy) => group.with_policy(policy),
            None => group,
        }
    }
}
