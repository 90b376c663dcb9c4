use crate::{log, log::Topic};
use std::collections::BTreeMap;

///
/// Observer
///

pub trait Observer {
    fn id(&self) -> &str;
    fn update(&mut self, news: &str);

    /// Number of updates received since attachment.
    fn deliveries(&self) -> usize;
}

///
/// NewsChannel
/// Keeps every item it has been sent.
///

#[derive(Debug)]
pub struct NewsChannel {
    id: String,
    name: String,
    history: Vec<String>,
}

impl NewsChannel {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Observer for NewsChannel {
    fn id(&self) -> &str {
        &self.id
    }

    fn update(&mut self, news: &str) {
        log!(Topic::Observer, Info, "📺 {} received news: {news}", self.name);
        self.history.push(news.to_string());
    }

    fn deliveries(&self) -> usize {
        self.history.len()
    }
}

///
/// NewsWebsite
///

#[derive(Debug)]
pub struct NewsWebsite {
    id: String,
    name: String,
    url: String,
    deliveries: usize,
}

impl NewsWebsite {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            deliveries: 0,
        }
    }
}

impl Observer for NewsWebsite {
    fn id(&self) -> &str {
        &self.id
    }

    fn update(&mut self, news: &str) {
        log!(
            Topic::Observer,
            Info,
            "🌐 {} ({}): Breaking news - {news}",
            self.name,
            self.url
        );
        self.deliveries += 1;
    }

    fn deliveries(&self) -> usize {
        self.deliveries
    }
}

///
/// MobileApp
///

#[derive(Debug)]
pub struct MobileApp {
    id: String,
    name: String,
    user_count: u32,
    deliveries: usize,
}

impl MobileApp {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, user_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user_count,
            deliveries: 0,
        }
    }
}

impl Observer for MobileApp {
    fn id(&self) -> &str {
        &self.id
    }

    fn update(&mut self, news: &str) {
        log!(
            Topic::Observer,
            Info,
            "📱 {} ({} users): Push notification - {news}",
            self.name,
            self.user_count
        );
        self.deliveries += 1;
    }

    fn deliveries(&self) -> usize {
        self.deliveries
    }
}

///
/// NewsAgency
///
/// Subject keyed by observer id. Notification order follows id order.
///

#[derive(Default)]
pub struct NewsAgency {
    observers: BTreeMap<String, Box<dyn Observer>>,
    latest: Option<String>,
}

impl NewsAgency {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer, replacing any existing one with the same id.
    pub fn attach(&mut self, observer: impl Observer + 'static) {
        let id = observer.id().to_string();
        log!(Topic::Observer, Info, "🔗 Attaching {id}");

        self.observers.insert(id, Box::new(observer));
    }

    /// Detach by id; returns false if nothing was attached under it.
    pub fn detach(&mut self, id: &str) -> bool {
        let removed = self.observers.remove(id).is_some();
        if removed {
            log!(Topic::Observer, Info, "🔗 Detached {id}");
        } else {
            log!(Topic::Observer, Warn, "no observer attached as {id}");
        }

        removed
    }

    /// Store `news` as the latest item and notify everyone attached.
    /// Returns the number of observers notified.
    pub fn publish(&mut self, news: impl Into<String>) -> usize {
        let news = news.into();
        log!(Topic::Observer, Info, "📰 News Agency publishing: {news}");

        for observer in self.observers.values_mut() {
            observer.update(&news);
        }
        self.latest = Some(news);

        self.observers.len()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    #[must_use]
    pub fn observer(&self, id: &str) -> Option<&dyn Observer> {
        self.observers.get(id).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn agency() -> NewsAgency {
        let mut agency = NewsAgency::new();
        agency.attach(NewsChannel::new("cnn", "CNN"));
        agency.attach(NewsChannel::new("bbc", "BBC"));
        agency.attach(NewsWebsite::new("reuters", "Reuters", "https://reuters.com"));
        agency.attach(MobileApp::new("news_app", "Breaking News App", 1_000_000));
        agency
    }

    #[test]
    fn publish_notifies_everyone() {
        let mut agency = agency();

        assert_eq!(agency.publish("first"), 4);
        assert_eq!(agency.latest(), Some("first"));

        for id in ["cnn", "bbc", "reuters", "news_app"] {
            assert_eq!(agency.observer(id).unwrap().deliveries(), 1);
        }
    }

    #[test]
    fn detached_observer_is_not_notified() {
        let mut agency = agency();
        agency.publish("first");

        assert!(agency.detach("bbc"));
        assert!(!agency.detach("bbc"));
        assert_eq!(agency.publish("second"), 3);

        assert!(agency.observer("bbc").is_none());
        assert_eq!(agency.observer("cnn").unwrap().deliveries(), 2);
    }

    #[test]
    fn attach_with_same_id_replaces() {
        let mut agency = agency();
        agency.publish("first");

        agency.attach(NewsChannel::new("cnn", "CNN International"));

        assert_eq!(agency.len(), 4);
        assert_eq!(agency.observer("cnn").unwrap().deliveries(), 0);
    }

    #[test]
    fn channel_keeps_history() {
        let mut channel = NewsChannel::new("cnn", "CNN");

        channel.update("a");
        channel.update("b");

        assert_eq!(channel.history(), ["a".to_string(), "b".to_string()]);
    }
}
