//! Per-page document-head metadata. Writing the head is a deliberate side
//! effect invoked from exactly one place, the page-transition effect in
//! `App`; page components never touch it.

use crate::Page;

pub struct PageSeo {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

static HOME: PageSeo = PageSeo {
    title: "San Mateo Insurance Agent | Personal Lines Coverage | Auto & Home Insurance CA",
    description: "Your trusted personal lines insurance agent in San Mateo, CA. Protecting what matters most - your home, car, and family - with affordable, customized coverage.",
    keywords: &[
        "San Mateo insurance agent",
        "personal lines insurance San Mateo",
        "auto insurance San Mateo CA",
        "home insurance San Mateo CA",
    ],
};

static ABOUT: PageSeo = PageSeo {
    title: "About Your San Mateo Insurance Agent | Personal Story & Mission",
    description: "Meet your dedicated San Mateo insurance agent with 15+ years of experience protecting Bay Area families. Learn about our mission, values, and commitment to personalized service.",
    keywords: &[
        "San Mateo insurance agent",
        "about insurance agent",
        "Bay Area insurance expert",
        "personal insurance story",
        "local agent mission",
    ],
};

static SERVICES: PageSeo = PageSeo {
    title: "Personal Lines Insurance Services | San Mateo Auto, Home, Renters Coverage",
    description: "From auto and home insurance to renters and umbrella policies, I provide comprehensive personal lines coverage tailored to your lifestyle. Serving San Mateo, Burlingame, Foster City, Redwood City, and beyond.",
    keywords: &[
        "auto insurance San Mateo",
        "home insurance San Mateo CA",
        "renters insurance San Mateo",
        "umbrella insurance San Mateo",
    ],
};

static TESTIMONIALS: PageSeo = PageSeo {
    title: "Client Reviews | San Mateo Insurance Agent Testimonials",
    description: "Hear from San Mateo clients who trust me to protect their homes, cars, and families with reliable coverage and exceptional service.",
    keywords: &[
        "San Mateo insurance reviews",
        "insurance agent testimonials",
        "Bay Area insurance service",
    ],
};

static CONTACT: PageSeo = PageSeo {
    title: "Contact | Get Your Free Insurance Quote in San Mateo CA",
    description: "Request your free insurance quote today. Call, email, or fill out the form - I'm here to help you find the right coverage in San Mateo, CA.",
    keywords: &[
        "insurance quotes San Mateo",
        "free insurance quote",
        "San Mateo insurance contact",
        "Bay Area insurance agent",
    ],
};

pub fn seo_for(page: Page) -> &'static PageSeo {
    match page {
        Page::Home => &HOME,
        Page::About => &ABOUT,
        Page::Services => &SERVICES,
        Page::Testimonials => &TESTIMONIALS,
        Page::Contact => &CONTACT,
    }
}

/// Rewrites title, description, and keywords for the given page. Idempotent;
/// a missing document is a no-op.
pub fn apply(page: Page) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let data = seo_for(page);
    document.set_title(data.title);
    upsert_meta(&document, "description", data.description);
    upsert_meta(&document, "keywords", &data.keywords.join(", "));
}

fn upsert_meta(document: &web_sys::Document, name: &str, content: &str) {
    let selector = format!("meta[name=\"{name}\"]");
    let meta = match document.query_selector(&selector).ok().flatten() {
        Some(existing) => existing,
        None => {
            let Ok(created) = document.create_element("meta") else {
                return;
            };
            let _ = created.set_attribute("name", name);
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    let _ = meta.set_attribute("content", content);
}

#[cfg(test)]
mod tests {
    use super::seo_for;
    use crate::NAV_PAGES;

    #[test]
    fn every_page_has_complete_metadata() {
        for page in NAV_PAGES {
            let data = seo_for(page);
            assert!(!data.title.is_empty());
            assert!(!data.description.is_empty());
            assert!(!data.keywords.is_empty());
        }
    }

    #[test]
    fn keywords_join_with_comma_and_space() {
        let joined = seo_for(crate::Page::Testimonials).keywords.join(", ");
        assert_eq!(
            joined,
            "San Mateo insurance reviews, insurance agent testimonials, Bay Area insurance service"
        );
    }
}
