use super::*;
use std::sync::Mutex;

/// Screen that keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("recorder poisoned").clone()
    }
    pub fn count<F>(&self, filter: F) -> usize
    where
        F: Fn(&Event) -> bool,
    {
        self.events
            .lock()
            .expect("recorder poisoned")
            .iter()
            .filter(|e| filter(e))
            .count()
    }
    pub fn clear(&self) {
        self.events.lock().expect("recorder poisoned").clear();
    }
}

impl Screen for Recorder {
    fn notify(&self, event: Event) {
        self.events.lock().expect("recorder poisoned").push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn records_in_order() {
        let recorder = Recorder::default();
        recorder.notify(Event::RemoveCard { slot: 1 });
        recorder.notify(Event::PlaceCard { card: 4, slot: 1 });
        assert_eq!(
            recorder.events(),
            vec![
                Event::RemoveCard { slot: 1 },
                Event::PlaceCard { card: 4, slot: 1 }
            ]
        );
        assert_eq!(recorder.count(|e| matches!(e, Event::PlaceCard { .. })), 1);
        recorder.clear();
        assert!(recorder.events().is_empty());
    }
}
