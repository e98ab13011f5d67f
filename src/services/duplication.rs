//! Deep duplication of an article with its relational fan-out.

use std::sync::Arc;
use tracing::info;

use crate::constants::{COPY_SLUG_INFIX, COPY_TITLE_SUFFIX};
use crate::error::{CmsError, Result};
use crate::models::{Article, CallerIdentity, NewArticle, NewArticleBundle, NewTopicLink};
use crate::repository::ArticleRepository;
use crate::state_machine::ArticleStatus;
use crate::utils::slug;

pub struct DuplicationService {
    repository: Arc<dyn ArticleRepository>,
}

impl DuplicationService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Clone the source article and its association rows into a new DRAFT
    /// identity owned by `caller`.
    ///
    /// Content, summary, reading time and SEO fields are copied verbatim;
    /// the title gains a copy suffix and the slug a random disambiguator so
    /// uniqueness holds without a retry loop. Lifecycle timestamps are not
    /// carried over. The new article row and every cloned link row are
    /// persisted in one transaction; on failure nothing is created.
    pub async fn duplicate(&self, source_id: i64, caller: &CallerIdentity) -> Result<Article> {
        let bundle = self
            .repository
            .fetch_bundle(source_id)
            .await?
            .ok_or(CmsError::NotFound("Article"))?;

        let source = bundle.article;
        let new_slug = format!(
            "{}{}{}",
            source.slug,
            COPY_SLUG_INFIX,
            slug::short_token()
        );

        let draft = NewArticleBundle {
            article: NewArticle {
                slug: new_slug,
                title: format!("{}{}", source.title, COPY_TITLE_SUFFIX),
                summary: source.summary,
                content: source.content,
                status: ArticleStatus::Draft,
                reading_time_minutes: source.reading_time_minutes,
                seo_title: source.seo_title,
                seo_description: source.seo_description,
                author_id: caller.user_id,
            },
            topic_links: bundle
                .topic_links
                .iter()
                .map(|link| NewTopicLink {
                    topic_id: link.topic_id,
                    order_index: link.order_index,
                })
                .collect(),
            tag_ids: bundle.tag_links.iter().map(|link| link.tag_id).collect(),
        };

        let article = self.repository.create_with_associations(draft).await?;

        info!(
            source_id,
            article_id = article.id,
            author_id = caller.user_id,
            "duplicated article"
        );

        Ok(article)
    }
}
