use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use crate::models::user::User;

pub const SESSION_COOKIE: &str = "JOBBOARD_SESSION";

/// In-process session registry. Lives inside `AppState`; each request gets
/// a `Session` handle tied to its cookie, so identity is always passed
/// explicitly into the handlers that need it.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the request's session from the cookie jar, minting a fresh id
    /// (and cookie) when none is present or the value does not parse.
    pub fn attach(&self, jar: CookieJar) -> (Session, CookieJar) {
        let existing = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());
        match existing {
            Some(id) => (self.open(id), jar),
            None => {
                let id = Uuid::new_v4();
                let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                    .path("/")
                    .http_only(true)
                    .build();
                (self.open(id), jar.add(cookie))
            }
        }
    }

    /// Direct handle for callers that already know the session id.
    pub fn open(&self, id: Uuid) -> Session {
        Session {
            id,
            store: self.clone(),
        }
    }
}

pub struct Session {
    id: Uuid,
    store: SessionStore,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> Option<User> {
        self.store
            .inner
            .read()
            .expect("session registry poisoned")
            .get(&self.id)
            .cloned()
    }

    pub fn set_user(&self, user: User) {
        self.store
            .inner
            .write()
            .expect("session registry poisoned")
            .insert(self.id, user);
    }

    pub fn invalidate(&self) {
        self.store
            .inner
            .write()
            .expect("session registry poisoned")
            .remove(&self.id);
    }
}
