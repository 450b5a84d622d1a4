use std::rc::Rc;

use crate::content::{
    SkillCategory, SocialLink, CONTACT_BLURB, CONTACT_EMAIL_HREF, CONTACT_HEADING, FOOTER_LINE,
    HERO_BIO, HERO_HEADING, HERO_TAGLINE, NAV_LINKS, OWNER_NAME, PROFILE_PHOTO_SIZE,
    PROFILE_PHOTO_SRC, PROJECTS, PROJECTS_HEADING, SKILLS_HEADING, SKILL_CATEGORIES, SOCIAL_LINKS,
};
use crate::particles::{spawn_field, Particle};
use crate::reveal::{RevealRegistry, REVEAL_THRESHOLD};
use gloo_events::EventListener;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
struct PointerPosition {
    x: i32,
    y: i32,
}

impl PointerPosition {
    fn glow_style(self) -> String {
        format!("--glow-x: {}px; --glow-y: {}px;", self.x, self.y)
    }
}

impl Reducible for RevealRegistry {
    type Action = String;

    fn reduce(self: Rc<Self>, region: Self::Action) -> Rc<Self> {
        if self.has_entered(&region) {
            return self;
        }

        let mut next = (*self).clone();
        next.mark_entered(&region);
        Rc::new(next)
    }
}

// Disconnects the observer when the owning effect is torn down; the closure
// must outlive every callback the browser may still deliver before that.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_marked_regions(revealed: UseReducerHandle<RevealRegistry>) -> Option<RevealObserver> {
    let document = window()?.document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };

            if !entry.is_intersecting() {
                continue;
            }

            revealed.dispatch(entry.target().id());
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let marked = document.query_selector_all("[data-animate]").ok()?;
    for index in 0..marked.length() {
        let Some(node) = marked.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };

        observer.observe(&element);
    }

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
struct ParticleFieldProps {
    particles: Vec<Particle>,
}

#[function_component(ParticleField)]
fn particle_field(props: &ParticleFieldProps) -> Html {
    html! {
        <div class="particle-field" aria-hidden="true">
            { for props.particles.iter().map(|particle| html! {
                <span key={particle.id} class="particle" style={particle.style()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SocialPillProps {
    link: SocialLink,
}

#[function_component(SocialPill)]
fn social_pill(props: &SocialPillProps) -> Html {
    let link = props.link;
    let external = link.href.starts_with("https://");

    html! {
        <a
            class="social-pill"
            href={link.href}
            target={external.then_some("_blank")}
            rel={external.then_some("noopener noreferrer")}
        >
            <span aria-hidden="true">{link.icon}</span>
            {" "}
            {link.label}
            if external {
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    category: SkillCategory,
    region: AttrValue,
    entered: bool,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let category = props.category;

    html! {
        <div
            id={props.region.clone()}
            data-animate="true"
            class={classes!(
                "skill-card",
                "reveal",
                "reveal-left",
                props.entered.then_some("is-revealed")
            )}
        >
            <div class="card-heading">
                <span class="card-icon" aria-hidden="true">{category.icon}</span>
                <h3>{category.title}</h3>
            </div>
            <ul class="skill-items">
                { for category.items.iter().map(|item| html! {
                    <li key={*item}>
                        <span class="item-dot" aria-hidden="true"></span>
                        {*item}
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: crate::content::Project,
    region: AttrValue,
    entered: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <article
            id={props.region.clone()}
            data-animate="true"
            class={classes!("project-card", "reveal", props.entered.then_some("is-revealed"))}
        >
            <div class="card-heading">
                <span class="card-icon" aria-hidden="true">{project.icon}</span>
                <h3>{project.title}</h3>
            </div>
            <p class="project-description">{project.description}</p>
            <a class="project-link" href={project.link} target="_blank" rel="noopener noreferrer">
                <span>{"View Project"}</span>
                <span aria-hidden="true">{"→"}</span>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            </a>
        </article>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let particles = use_state(|| {
        let mut rng = fastrand::Rng::new();
        spawn_field(&mut rng)
    });
    let revealed = use_reducer_eq(RevealRegistry::default);
    let pointer = use_state(PointerPosition::default);
    let scroll_offset = use_state(|| 0.0_f64);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let observer = observe_marked_regions(revealed);
            move || drop(observer)
        });
    }

    {
        let pointer = pointer.clone();
        let scroll_offset = scroll_offset.clone();
        use_effect_with((), move |_| {
            let listeners = window().map(|win| {
                let on_move = {
                    let pointer = pointer.clone();
                    EventListener::new(&win, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };

                        pointer.set(PointerPosition {
                            x: event.client_x(),
                            y: event.client_y(),
                        });
                    })
                };

                let on_scroll = {
                    let scroll_offset = scroll_offset.clone();
                    let scroll_window = win.clone();
                    EventListener::new(&win, "scroll", move |_| {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        scroll_offset.set(offset);
                    })
                };

                (on_move, on_scroll)
            });

            move || drop(listeners)
        });
    }

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>

            <ParticleField particles={(*particles).clone()} />

            <div class="cursor-glow" aria-hidden="true" style={(*pointer).glow_style()} />

            <nav class="site-nav" aria-label="Primary">
                <div class="nav-inner">
                    <span class="nav-brand">{OWNER_NAME}</span>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.label} class="nav-link" href={link.target}>{link.label}</a>
                        }) }
                    </div>
                </div>
            </nav>

            <main id="content">
                <section id="about" class="hero-section" aria-labelledby="hero-heading">
                    <div class="hero-wash" aria-hidden="true"></div>
                    <div
                        id="hero"
                        data-animate="true"
                        class={classes!(
                            "hero-card",
                            "reveal",
                            revealed.has_entered("hero").then_some("is-revealed")
                        )}
                    >
                        <div class="hero-photo-ring">
                            <img
                                class="hero-photo"
                                src={PROFILE_PHOTO_SRC}
                                alt={OWNER_NAME}
                                width={PROFILE_PHOTO_SIZE.to_string()}
                                height={PROFILE_PHOTO_SIZE.to_string()}
                            />
                        </div>
                        <h1 id="hero-heading" class="hero-heading">{HERO_HEADING}</h1>
                        <p class="hero-tagline">{HERO_TAGLINE}</p>
                        <p class="hero-bio">{HERO_BIO}</p>
                        <div class="hero-links">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <SocialPill key={link.label} link={*link} />
                            }) }
                        </div>
                    </div>
                </section>

                <section id="skills" class="skills-section" aria-labelledby="skills-title">
                    <div class="section-inner">
                        <h2
                            id="skills-title"
                            data-animate="true"
                            class={classes!(
                                "section-heading",
                                "reveal",
                                revealed.has_entered("skills-title").then_some("is-revealed")
                            )}
                        >
                            {SKILLS_HEADING}
                        </h2>
                        <div class="skills-grid">
                            { for SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| {
                                let region = format!("skill-{index}");
                                let entered = revealed.has_entered(&region);
                                html! {
                                    <SkillCard
                                        key={index}
                                        category={*category}
                                        region={AttrValue::from(region)}
                                        entered={entered}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                </section>

                <section id="projects" class="projects-section" aria-labelledby="projects-title">
                    <div class="section-inner">
                        <h2
                            id="projects-title"
                            data-animate="true"
                            class={classes!(
                                "section-heading",
                                "reveal",
                                "reveal-scale",
                                revealed.has_entered("projects-title").then_some("is-revealed")
                            )}
                        >
                            {PROJECTS_HEADING}
                        </h2>
                        <div class="projects-grid">
                            { for PROJECTS.iter().enumerate().map(|(index, project)| {
                                let region = format!("project-{index}");
                                let entered = revealed.has_entered(&region);
                                html! {
                                    <ProjectCard
                                        key={index}
                                        project={*project}
                                        region={AttrValue::from(region)}
                                        entered={entered}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact-section" aria-labelledby="contact-heading">
                    <div
                        id="contact-content"
                        data-animate="true"
                        class={classes!(
                            "contact-content",
                            "reveal",
                            revealed.has_entered("contact-content").then_some("is-revealed")
                        )}
                    >
                        <h2 id="contact-heading" class="section-heading">{CONTACT_HEADING}</h2>
                        <p class="contact-blurb">{CONTACT_BLURB}</p>
                        <a class="contact-cta" href={CONTACT_EMAIL_HREF}>
                            <span>{"Send Message"}</span>
                            <span aria-hidden="true">{"✨"}</span>
                        </a>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="footer-line">{FOOTER_LINE}</div>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
