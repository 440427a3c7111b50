//! Page assemblers for the marketing site and dashboard.
//!
//! Each route gets one assembler returning a fixed, statically ordered list of
//! presentational sections. There is no conditional logic here: every page
//! starts with the navbar, ends with the footer, and renders its sections in
//! exactly the declared order. The single askama template in
//! `templates/page.html` turns a `PageSpec` into HTML.
#![allow(dead_code)]

pub mod handlers;

// ────────────────────────────────────────────────────────────────────────────
// Section types
// ────────────────────────────────────────────────────────────────────────────

/// One presentational section of a page, rendered in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Navbar,
    Hero(Hero),
    Prose(Prose),
    ContactCard(ContactCard),
    CheckoutPanel(CheckoutPanel),
    ProfilePanel(ProfilePanel),
    ProductGrid(ProductGrid),
    Cta(Cta),
    Footer,
}

impl Section {
    /// Stable kind tag, also emitted as the `data-section` attribute in HTML.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Navbar => "navbar",
            Section::Hero(_) => "hero",
            Section::Prose(_) => "prose",
            Section::ContactCard(_) => "contact-card",
            Section::CheckoutPanel(_) => "checkout-panel",
            Section::ProfilePanel(_) => "profile-panel",
            Section::ProductGrid(_) => "product-grid",
            Section::Cta(_) => "cta",
            Section::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prose {
    pub heading: &'static str,
    pub paragraphs: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPanel {
    pub plan: &'static str,
    pub price_inr: u32,
    pub perks: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePanel {
    pub menu: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductGrid {
    pub products: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price_inr: u32,
    /// External hosted product page; checkout happens off-site.
    pub buy_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cta {
    pub label: &'static str,
    pub href: String,
}

/// A fully assembled page: title plus its ordered section list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    pub slug: &'static str,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assemblers
// ────────────────────────────────────────────────────────────────────────────

pub fn home() -> PageSpec {
    PageSpec {
        slug: "/",
        title: "Home",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Crack your next interview",
                tagline: "Mock interviews, structured feedback, and resume analysis in one place.",
            }),
            Section::Prose(Prose {
                heading: "Why PrepForge",
                paragraphs: vec![
                    "Practice with realistic interview questions and get a written \
                     feedback report after every session.",
                    "Every answer is scored, every session ends with concrete areas \
                     to improve, and your resume gets the same treatment.",
                ],
            }),
            Section::Cta(Cta {
                label: "Explore Interview Master",
                href: "/interview-master".to_string(),
            }),
            Section::Footer,
        ],
    }
}

pub fn about() -> PageSpec {
    PageSpec {
        slug: "/about-us",
        title: "About Us",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "About PrepForge",
                tagline: "Built by engineers who sat on both sides of the table.",
            }),
            Section::Prose(Prose {
                heading: "What we do",
                paragraphs: vec![
                    "PrepForge helps candidates prepare for technical and behavioral \
                     interviews with guided mock sessions.",
                    "Feedback is written, specific, and yours to keep as a PDF report.",
                ],
            }),
            Section::Footer,
        ],
    }
}

pub fn contact() -> PageSpec {
    PageSpec {
        slug: "/contact-us",
        title: "Contact Us",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Contact Us",
                tagline: "Questions about a session or an order? Write to us.",
            }),
            Section::ContactCard(ContactCard {
                email: "support@prepforge.in",
                phone: "+91 98765 43210",
                address: "PrepForge Education LLP, Bengaluru, Karnataka, India",
            }),
            Section::Footer,
        ],
    }
}

pub fn privacy_policy() -> PageSpec {
    PageSpec {
        slug: "/privacy-policy",
        title: "Privacy Policy",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Privacy Policy",
                tagline: "What we collect and how we use it.",
            }),
            Section::Prose(Prose {
                heading: "Your data",
                paragraphs: vec![
                    "We store the details you share during a session only to produce \
                     your feedback report.",
                    "We never sell personal data. Write to support to have your \
                     account data removed.",
                ],
            }),
            Section::Footer,
        ],
    }
}

pub fn terms() -> PageSpec {
    PageSpec {
        slug: "/terms-and-conditions",
        title: "Terms & Conditions",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Terms & Conditions",
                tagline: "The short version of the fine print.",
            }),
            Section::Prose(Prose {
                heading: "Use of the platform",
                paragraphs: vec![
                    "Sessions are licensed for personal, non-transferable use.",
                    "Recorded feedback is provided as-is and does not guarantee any \
                     interview outcome.",
                ],
            }),
            Section::Footer,
        ],
    }
}

pub fn refund_policy() -> PageSpec {
    PageSpec {
        slug: "/cancellation-and-refund",
        title: "Cancellation & Refund",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Cancellation & Refund",
                tagline: "Plain rules, no surprises.",
            }),
            Section::Prose(Prose {
                heading: "Refunds",
                paragraphs: vec![
                    "Cancel an unused session up to 24 hours before the slot for a \
                     full refund.",
                    "Completed sessions and delivered reports are not refundable.",
                ],
            }),
            Section::Footer,
        ],
    }
}

pub fn checkout() -> PageSpec {
    PageSpec {
        slug: "/checkout",
        title: "Checkout",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Checkout",
                tagline: "Review your plan before you pay.",
            }),
            Section::CheckoutPanel(CheckoutPanel {
                plan: "Interview Master - Single Session",
                price_inr: 999,
                perks: vec![
                    "45-minute mock interview",
                    "Written feedback report (PDF)",
                    "Resume analysis included",
                ],
            }),
            Section::Footer,
        ],
    }
}

pub fn profile() -> PageSpec {
    PageSpec {
        slug: "/profile",
        title: "Your Profile",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Your Profile",
                tagline: "Sessions, reports, and account settings.",
            }),
            Section::ProfilePanel(ProfilePanel {
                menu: vec!["My Sessions", "My Reports", "Account Settings", "Sign Out"],
            }),
            Section::Footer,
        ],
    }
}

/// The Interview Master product listing. `buy_now_url` is the configured
/// external hosted product page.
pub fn interview_master(buy_now_url: &str) -> PageSpec {
    PageSpec {
        slug: "/interview-master",
        title: "Interview Master",
        sections: vec![
            Section::Navbar,
            Section::Hero(Hero {
                title: "Interview Master",
                tagline: "A guided mock interview with a written feedback report.",
            }),
            Section::ProductGrid(ProductGrid {
                products: vec![
                    ProductCard {
                        name: "Interview Master - Single Session",
                        blurb: "One 45-minute mock interview with scored answers.",
                        price_inr: 999,
                        buy_url: buy_now_url.to_string(),
                    },
                    ProductCard {
                        name: "Interview Master - Bundle of 3",
                        blurb: "Three sessions with progress tracked across reports.",
                        price_inr: 2499,
                        buy_url: buy_now_url.to_string(),
                    },
                ],
            }),
            Section::Cta(Cta {
                label: "Talk to us before buying",
                href: "/contact-us".to_string(),
            }),
            Section::Footer,
        ],
    }
}

/// Every assembler paired with its route slug, in router order.
pub fn all_pages(buy_now_url: &str) -> Vec<PageSpec> {
    vec![
        home(),
        about(),
        contact(),
        privacy_policy(),
        terms(),
        refund_policy(),
        checkout(),
        profile(),
        interview_master(buy_now_url),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
