//! In-memory repositories for tests
//!
//! Compiled for this crate's unit tests and, through the `test-support`
//! feature, for the API crate's router tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use booknest_core::entities::{
    Book, Category, Comment, CommentReaction, Favorite, NewBook, NewComment,
};
use booknest_core::error::DomainError;
use booknest_core::traits::{
    BookQuery, BookRepository, CategoryRepository, CommentRepository, FavoriteRepository,
    ReactionRepository, RepoResult,
};
use booknest_core::value_objects::{BookId, CategoryId, CommentId, UserId};

use crate::mail::{ContactMessage, MailError, Mailer};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Tables {
    next_id: i64,
    books: BTreeMap<i64, Book>,
    categories: BTreeMap<i64, Category>,
    favorites: Vec<Favorite>,
    comments: Vec<Comment>,
    reactions: Vec<CommentReaction>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
struct Inner {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

/// Shared in-memory row store implementing every repository trait
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context wired to this store, without cache or mailer
    pub fn context(&self) -> ServiceContext {
        self.builder().build().unwrap()
    }

    /// Builder wired to this store, for adding optional collaborators
    pub fn builder(&self) -> ServiceContextBuilder {
        ServiceContextBuilder::new()
            .book_repo(Arc::new(self.clone()))
            .category_repo(Arc::new(self.clone()))
            .favorite_repo(Arc::new(self.clone()))
            .comment_repo(Arc::new(self.clone()))
            .reaction_repo(Arc::new(self.clone()))
    }

    /// Number of repository calls so far
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Make every later call fail like an unreachable database
    pub fn fail_all(&self) {
        self.inner.failing.store(true, Ordering::SeqCst);
    }

    pub fn add_book(&self, title: &str) -> Book {
        let mut tables = self.inner.tables.lock().unwrap();
        let id = tables.next_id();
        let book = Book {
            id: BookId::new(id),
            title: title.to_string(),
            author: "Test Author".to_string(),
            description: None,
            cover_url: None,
            category_id: None,
            published_year: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.books.insert(id, book.clone());
        book
    }

    pub fn add_comment(&self, book_id: BookId, user_id: UserId, body: &str) -> Comment {
        let mut tables = self.inner.tables.lock().unwrap();
        let id = tables.next_id();
        let comment = Comment {
            id: CommentId::new(id),
            book_id,
            user_id,
            body: body.to_string(),
            created_at: Utc::now(),
        };
        tables.comments.push(comment.clone());
        comment
    }

    pub fn add_reaction(&self, reaction: CommentReaction) {
        self.inner.tables.lock().unwrap().reactions.push(reaction);
    }

    pub fn reaction_count(&self) -> usize {
        self.inner.tables.lock().unwrap().reactions.len()
    }

    fn enter(&self) -> RepoResult<std::sync::MutexGuard<'_, Tables>> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.failing.load(Ordering::SeqCst) {
            return Err(DomainError::PersistenceError(
                "connection refused".to_string(),
            ));
        }
        Ok(self.inner.tables.lock().unwrap())
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn find_by_id(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self.enter()?.books.get(&id.into_inner()).cloned())
    }

    async fn find_all(&self, query: &BookQuery) -> RepoResult<Vec<Book>> {
        let tables = self.enter()?;
        let needle = query.search.as_deref().map(str::to_lowercase);
        let mut books: Vec<Book> = tables
            .books
            .values()
            .filter(|b| query.category_id.is_none() || b.category_id == query.category_id)
            .filter(|b| {
                needle.as_deref().map_or(true, |n| {
                    b.title.to_lowercase().contains(n) || b.author.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(books
            .into_iter()
            .skip(usize::try_from(query.offset).unwrap_or(0))
            .take(usize::try_from(query.limit).unwrap_or(0))
            .collect())
    }

    async fn exists(&self, id: BookId) -> RepoResult<bool> {
        Ok(self.enter()?.books.contains_key(&id.into_inner()))
    }

    async fn create(&self, book: &NewBook) -> RepoResult<Book> {
        let mut tables = self.enter()?;
        if let Some(category_id) = book.category_id {
            if !tables.categories.contains_key(&category_id.into_inner()) {
                return Err(DomainError::CategoryNotFound(category_id));
            }
        }
        let id = tables.next_id();
        let created = Book {
            id: BookId::new(id),
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            cover_url: book.cover_url.clone(),
            category_id: book.category_id,
            published_year: book.published_year,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.books.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, book: &Book) -> RepoResult<()> {
        let mut tables = self.enter()?;
        match tables.books.get_mut(&book.id.into_inner()) {
            Some(stored) => {
                *stored = book.clone();
                stored.updated_at = Utc::now();
                Ok(())
            }
            None => Err(DomainError::BookNotFound(book.id)),
        }
    }

    async fn delete(&self, id: BookId) -> RepoResult<bool> {
        let mut tables = self.enter()?;
        let removed = tables.books.remove(&id.into_inner()).is_some();
        tables.favorites.retain(|f| f.book_id != id);
        tables.comments.retain(|c| c.book_id != id);
        Ok(removed)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.enter()?.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self.enter()?.categories.get(&id.into_inner()).cloned())
    }

    async fn create(&self, name: &str) -> RepoResult<Category> {
        let mut tables = self.enter()?;
        if tables
            .categories
            .values()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(DomainError::CategoryAlreadyExists(name.to_string()));
        }
        let id = tables.next_id();
        let category = Category::new(CategoryId::new(id), name.to_string());
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> RepoResult<bool> {
        let mut tables = self.enter()?;
        let removed = tables.categories.remove(&id.into_inner()).is_some();
        for book in tables.books.values_mut() {
            if book.category_id == Some(id) {
                book.category_id = None;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn exists(&self, user_id: UserId, book_id: BookId) -> RepoResult<bool> {
        Ok(self
            .enter()?
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.book_id == book_id))
    }

    async fn create(&self, favorite: &Favorite) -> RepoResult<bool> {
        let mut tables = self.enter()?;
        if !tables.books.contains_key(&favorite.book_id.into_inner()) {
            return Err(DomainError::BookNotFound(favorite.book_id));
        }
        if tables
            .favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.book_id == favorite.book_id)
        {
            return Ok(false);
        }
        tables.favorites.push(favorite.clone());
        Ok(true)
    }

    async fn delete(&self, user_id: UserId, book_id: BookId) -> RepoResult<bool> {
        let mut tables = self.enter()?;
        let before = tables.favorites.len();
        tables
            .favorites
            .retain(|f| !(f.user_id == user_id && f.book_id == book_id));
        Ok(tables.favorites.len() < before)
    }

    async fn find_books_by_user(&self, user_id: UserId) -> RepoResult<Vec<Book>> {
        let tables = self.enter()?;
        Ok(tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| tables.books.get(&f.book_id.into_inner()).cloned())
            .collect())
    }

    async fn count_by_book(&self, book_id: BookId) -> RepoResult<i64> {
        let count = self
            .enter()?
            .favorites
            .iter()
            .filter(|f| f.book_id == book_id)
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.enter()?.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_book(&self, book_id: BookId) -> RepoResult<Vec<Comment>> {
        Ok(self
            .enter()?
            .comments
            .iter()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut tables = self.enter()?;
        if !tables.books.contains_key(&comment.book_id.into_inner()) {
            return Err(DomainError::BookNotFound(comment.book_id));
        }
        let id = tables.next_id();
        let created = Comment {
            id: CommentId::new(id),
            book_id: comment.book_id,
            user_id: comment.user_id,
            body: comment.body.clone(),
            created_at: Utc::now(),
        };
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        let mut tables = self.enter()?;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        tables.reactions.retain(|r| r.comment_id != id);
        Ok(tables.comments.len() < before)
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn find_by_comments(&self, comment_ids: &[CommentId]) -> RepoResult<Vec<CommentReaction>> {
        Ok(self
            .enter()?
            .reactions
            .iter()
            .filter(|r| comment_ids.contains(&r.comment_id))
            .cloned()
            .collect())
    }

    async fn upsert(&self, reaction: &CommentReaction) -> RepoResult<()> {
        let mut tables = self.enter()?;
        if !tables.comments.iter().any(|c| c.id == reaction.comment_id) {
            return Err(DomainError::CommentNotFound(reaction.comment_id));
        }
        match tables
            .reactions
            .iter_mut()
            .find(|r| r.comment_id == reaction.comment_id && r.user_id == reaction.user_id)
        {
            Some(existing) => existing.kind = reaction.kind.clone(),
            None => tables.reactions.push(reaction.clone()),
        }
        Ok(())
    }

    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> RepoResult<bool> {
        let mut tables = self.enter()?;
        let before = tables.reactions.len();
        tables
            .reactions
            .retain(|r| !(r.comment_id == comment_id && r.user_id == user_id));
        Ok(tables.reactions.len() < before)
    }
}

/// Mailer that records what it was asked to send
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
