//! Page composition: loads content per request and renders it through the
//! template environment.

mod export;
mod profile;
mod render;
mod views;

pub use export::{ExportSummary, export};
pub use profile::{
    AboutCopy, Experience, HomeCopy, Person, Profile, ProfileError, ProfileImage, Skill,
    SocialLink, Study, WorkCopy,
};
pub use render::{NOT_FOUND_PAGE, RenderError, Renderer};
pub use views::{
    DeliverableView, DocumentGroupView, DocumentView, ExperienceView, ProjectCardView, paragraphs,
    project_href,
};

use minijinja::context;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::carousel::{Carousel, CarouselView, Preloader, SlideItem, SlidePositions, normalize_id};
use crate::catalog::{ProjectQuery, academic_card_titles, slide_captions};
use crate::config::Config;
use crate::content::{Category, ContentError, ContentLoader, ContentRecord};
use crate::documents::{DocumentError, DocumentLibrary, preview_src};

/// Project cards shown on the home page.
const HOME_PROJECT_COUNT: usize = 2;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Documents(#[from] DocumentError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::Content(ContentError::NotFound(_)))
    }
}

/// The portfolio site: profile, templates and content locations.
pub struct Site {
    config: Arc<Config>,
    profile: Profile,
    renderer: Renderer,
    loader: ContentLoader,
    preloader: Option<Preloader>,
    navigation: bool,
}

impl Site {
    pub fn new(
        config: Arc<Config>,
        profile: Profile,
        preloader: Option<Preloader>,
    ) -> Result<Self, SiteError> {
        let loader = ContentLoader::new(config.content.max_file_bytes);
        let preloader = preloader.filter(|_| config.carousel.preload);

        Ok(Self {
            config,
            profile,
            renderer: Renderer::new()?,
            loader,
            preloader,
            navigation: true,
        })
    }

    /// Render carousels without arrows or indicators. Their links carry the
    /// position in the query string, which a static file server ignores.
    pub fn without_navigation(mut self) -> Self {
        self.navigation = false;
        self
    }

    /// Read the profile named in `config` and build the site around it.
    pub async fn load(config: Arc<Config>, preloader: Option<Preloader>) -> Result<Self, SiteError> {
        let profile = Profile::load(&config.content.profile_file).await?;
        Self::new(config, profile, preloader)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Slugs of every project, newest first.
    pub async fn project_slugs(&self) -> Result<Vec<String>, SiteError> {
        let records = ProjectQuery::all().apply(self.projects().await?);
        Ok(records.into_iter().map(|record| record.slug).collect())
    }

    #[instrument(skip_all)]
    pub async fn home(&self, positions: &SlidePositions) -> Result<String, SiteError> {
        let records = ProjectQuery::latest(HOME_PROJECT_COUNT).apply(self.projects().await?);
        let titles = academic_card_titles(&self.library().await?);
        let cards = self.project_cards(&records, &titles, positions);
        let home = &self.profile.home;

        Ok(self.renderer.render(
            "home.html",
            context! {
                page => "home",
                title => non_empty_or(&home.title, &self.profile.person.name),
                description => &home.description,
                canonical => self.canonical("/"),
                profile => &self.profile,
                cards,
            },
        )?)
    }

    #[instrument(skip_all)]
    pub async fn about(&self, positions: &SlidePositions) -> Result<String, SiteError> {
        let about = &self.profile.about;
        let experiences: Vec<ExperienceView> = about
            .experiences
            .iter()
            .enumerate()
            .map(|(index, experience)| {
                let items = experience
                    .images
                    .iter()
                    .map(|image| SlideItem::image(&image.src).with_alt(&image.alt))
                    .collect();
                let id = normalize_id(&format!("experience-{index}-{}", experience.company));
                ExperienceView {
                    company: experience.company.clone(),
                    timeframe: experience.timeframe.clone(),
                    role: experience.role.clone(),
                    achievements: experience.achievements.clone(),
                    carousel: self.carousel(id, items, false, positions),
                }
            })
            .collect();

        Ok(self.renderer.render(
            "about.html",
            context! {
                page => "about",
                title => non_empty_or(&about.title, "About"),
                description => &about.description,
                canonical => self.canonical("/about"),
                profile => &self.profile,
                experiences,
            },
        )?)
    }

    #[instrument(skip_all)]
    pub async fn work(&self, positions: &SlidePositions) -> Result<String, SiteError> {
        let records = ProjectQuery::all().apply(self.projects().await?);
        let library = self.library().await?;
        let titles = academic_card_titles(&library);

        let highlights = self.highlights(&records, positions)?;
        let cards = self.project_cards(&records, &titles, positions);
        let groups = self.document_groups(&library).await;
        let work = &self.profile.work;

        Ok(self.renderer.render(
            "work.html",
            context! {
                page => "work",
                title => &work.title,
                description => &work.description,
                canonical => self.canonical("/work"),
                profile => &self.profile,
                highlights,
                cards,
                library => groups,
            },
        )?)
    }

    #[instrument(skip(self, positions))]
    pub async fn project(&self, slug: &str, positions: &SlidePositions) -> Result<String, SiteError> {
        let record = self
            .loader
            .load_one(&self.config.content.projects_dir, slug)
            .await?;
        let titles = academic_card_titles(&self.library().await?);

        let view = self.carousel(
            normalize_id(&format!("project-{}", record.slug)),
            self.project_slides(&record, &titles),
            true,
            positions,
        );
        let deliverables: Vec<DeliverableView> = record
            .metadata
            .deliverables
            .iter()
            .map(DeliverableView::from)
            .collect();
        let published = record.metadata.published_at;

        Ok(self.renderer.render(
            "project.html",
            context! {
                page => "work",
                title => &record.metadata.title,
                description => &record.metadata.summary,
                canonical => self.canonical(&project_href(&record.slug)),
                profile => &self.profile,
                published_iso => published.format("%Y-%m-%d").to_string(),
                published_label => published.format("%B %-d, %Y").to_string(),
                category => record.metadata.category.map(|category| category.label()),
                paragraphs => paragraphs(&record.body),
                project => &record,
                view,
                deliverables,
            },
        )?)
    }

    pub fn not_found(&self) -> Result<String, SiteError> {
        Ok(self.renderer.render("not_found.html", context! {})?)
    }

    async fn projects(&self) -> Result<Vec<ContentRecord>, SiteError> {
        Ok(self
            .loader
            .load_dir(&self.config.content.projects_dir)
            .await?)
    }

    async fn library(&self) -> Result<DocumentLibrary, SiteError> {
        Ok(DocumentLibrary::load(&self.config.content.documents_file).await?)
    }

    fn canonical(&self, path: &str) -> Option<String> {
        let base = self.profile.base_url.trim_end_matches('/');
        (!base.is_empty()).then(|| format!("{base}{path}"))
    }

    /// Build a carousel with the configured hints, restore its position from
    /// the request and start warming its images.
    fn carousel(
        &self,
        id: String,
        items: Vec<SlideItem>,
        priority: bool,
        positions: &SlidePositions,
    ) -> Option<CarouselView> {
        let settings = &self.config.carousel;
        let mut carousel = Carousel::builder()
            .id(id)
            .items(items)
            .aspect_ratio(settings.aspect_ratio.as_str())
            .sizes(settings.sizes.as_str())
            .priority(priority)
            .build();
        carousel.restore(positions);

        if let Some(preloader) = &self.preloader {
            let spawned = preloader.preload(&carousel);
            debug!(carousel = carousel.id(), spawned, "Started slide preloads");
        }

        let mut view = carousel.view(positions)?;
        if !self.navigation {
            view.controls = None;
        }
        Some(view)
    }

    /// Image slides of a project. Captioned images become opaque slides with
    /// the caption drawn over the image.
    fn project_slides(
        &self,
        record: &ContentRecord,
        card_titles: &HashMap<String, String>,
    ) -> Vec<SlideItem> {
        let captions = slide_captions(record, card_titles);

        project_images(record)
            .into_iter()
            .enumerate()
            .map(|(index, src)| match captions.get(index).filter(|c| !c.is_empty()) {
                Some(caption) => self
                    .renderer
                    .render(
                        "partials/captioned_slide.html",
                        context! { src => &src, caption },
                    )
                    .map(|html| SlideItem::block(html).with_alt(caption.as_str()))
                    .unwrap_or_else(|err| {
                        debug!(src = %src, error = %err, "Caption render failed, using plain image");
                        SlideItem::image(&src).with_alt(&record.metadata.title)
                    }),
                None => SlideItem::image(&src).with_alt(&record.metadata.title),
            })
            .collect()
    }

    fn project_cards(
        &self,
        records: &[ContentRecord],
        card_titles: &HashMap<String, String>,
        positions: &SlidePositions,
    ) -> Vec<ProjectCardView> {
        let mut taken = HashSet::new();

        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                // Distinct slugs can normalise to the same id.
                let base = normalize_id(&format!("project-{}", record.slug));
                let mut id = base.clone();
                let mut suffix = index;
                while !taken.insert(id.clone()) {
                    id = format!("{base}-{suffix}");
                    suffix += 1;
                }
                let carousel = self.carousel(
                    id,
                    self.project_slides(record, card_titles),
                    index < HOME_PROJECT_COUNT,
                    positions,
                );
                ProjectCardView::new(record, carousel)
            })
            .collect()
    }

    /// One opaque slide per project linking to its page.
    fn highlights(
        &self,
        records: &[ContentRecord],
        positions: &SlidePositions,
    ) -> Result<Option<CarouselView>, SiteError> {
        let fallback = &self.profile.work.fallback_image;
        let aspect_ratio = &self.config.carousel.aspect_ratio;

        let items = records
            .iter()
            .map(|record| {
                let metadata = &record.metadata;
                let image = project_images(record)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| fallback.clone());
                let text = metadata
                    .highlights
                    .first()
                    .unwrap_or(&metadata.summary)
                    .trim();

                let html = self.renderer.render(
                    "partials/highlight_slide.html",
                    context! {
                        href => project_href(&record.slug),
                        image,
                        title => &metadata.title,
                        text,
                        aspect_ratio,
                    },
                )?;
                Ok::<_, SiteError>(SlideItem::block(html).with_alt(&metadata.title))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.carousel("highlights".to_string(), items, true, positions))
    }

    /// Library groups with preview thumbnails that exist under the public dir.
    async fn document_groups(&self, library: &DocumentLibrary) -> Vec<DocumentGroupView> {
        let mut groups = Vec::new();

        for group in library.grouped() {
            let mut documents = Vec::with_capacity(group.documents.len());
            for document in group.documents {
                let preview = match preview_src(document) {
                    Some(src) if self.public_file_exists(&src).await => Some(src),
                    Some(src) => {
                        debug!(src = %src, "Preview thumbnail missing");
                        None
                    }
                    None => None,
                };
                documents.push(DocumentView {
                    title: document.title.clone(),
                    display_title: document.display_title().to_string(),
                    href: document.href.clone(),
                    size_label: document.size_label(),
                    open_label: document.open_label(),
                    preview,
                    external: document.external,
                });
            }

            groups.push(DocumentGroupView {
                category: group.category.label(),
                count_label: group.count_label,
                academic: group.category == Category::AcademicReport,
                documents,
            });
        }

        groups
    }

    async fn public_file_exists(&self, src: &str) -> bool {
        let path = self
            .config
            .content
            .public_dir
            .join(src.trim_start_matches('/'));
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Slide images of a project, falling back to its cover image.
fn project_images(record: &ContentRecord) -> Vec<String> {
    let metadata = &record.metadata;
    if metadata.images.is_empty() && !metadata.image.is_empty() {
        vec![metadata.image.clone()]
    } else {
        metadata.images.clone()
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
