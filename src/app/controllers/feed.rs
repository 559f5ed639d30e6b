use std::sync::Arc;
use std::thread;

use fltk::app::Sender;

use crate::app::domain::article::Category;
use crate::app::domain::messages::Message;
use crate::app::services::feed::ArticleSource;

/// Runs article fetches off the UI thread and posts the outcome back
/// through the FLTK channel.
///
/// Requests are deliberately not coordinated: two rapid category
/// clicks spawn two fetches and whichever finishes last wins, exactly
/// like the uncancelled loads this app models. The dispatch loop
/// applies `FeedLoaded` results in arrival order.
pub struct FeedController {
    source: Arc<dyn ArticleSource>,
    sender: Sender<Message>,
}

impl FeedController {
    pub fn new(source: Arc<dyn ArticleSource>, sender: Sender<Message>) -> Self {
        Self { source, sender }
    }

    pub fn spawn_fetch(&self, category: Category) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = source.fetch(category).map_err(|e| e.to_string());
            sender.send(Message::FeedLoaded(result));
        });
    }
}
