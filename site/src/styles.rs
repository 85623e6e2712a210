//! CSS for the site, inlined into every page head.
//!
//! Class names in this stylesheet are the styling contract the components
//! reference; the components carry no styling logic of their own.

/// Complete stylesheet for every page.
pub const SITE_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-soft: #f4f6fb;
    --bg-panel: #eef1f8;
    --text-main: #1c2433;
    --text-dim: #5a6578;
    --accent: #0078d4;
    --accent-dark: #005a9e;
    --hero-gradient: linear-gradient(135deg, #1b2a4a 0%, #0078d4 100%);
    --border-soft: rgba(28, 36, 51, 0.12);
    --font-sans: 'Segoe UI', system-ui, -apple-system, sans-serif;
    --container-max: 1100px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.6;
    margin: 0;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.site-main {
    min-height: 60vh;
}

/* Nav Bar */
.site-nav {
    background: var(--bg-page);
    border-bottom: 1px solid var(--border-soft);
    padding: 12px 0;
    position: sticky;
    top: 0;
    z-index: 50;
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
}

.nav-brand {
    font-weight: 700;
    letter-spacing: 0.12em;
    color: var(--text-main);
    text-decoration: none;
}

.nav-links {
    display: flex;
    gap: 20px;
}

.nav-link {
    color: var(--text-dim);
    text-decoration: none;
    font-size: 15px;
}

.nav-link:hover {
    color: var(--accent);
}

/* Hero */
.hero {
    background: var(--hero-gradient);
    color: #ffffff;
    padding: 96px 24px 72px;
    text-align: center;
}

.hero-content {
    max-width: var(--container-max);
    margin: 0 auto;
}

.hero-title {
    font-size: 56px;
    letter-spacing: 0.18em;
    margin: 0 0 12px;
}

.hero-subtitle {
    font-size: 20px;
    opacity: 0.85;
    margin: 0 0 48px;
}

.hero-features {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 24px;
    text-align: left;
}

.feature-card {
    background: rgba(255, 255, 255, 0.08);
    border: 1px solid rgba(255, 255, 255, 0.18);
    border-radius: 10px;
    padding: 24px;
}

.feature-card h3 {
    margin: 8px 0;
    font-size: 18px;
}

.feature-card p {
    margin: 0;
    font-size: 14px;
    opacity: 0.85;
}

.feature-icon {
    font-size: 32px;
}

/* Stats */
.stats {
    background: var(--bg-soft);
    padding: 56px 24px;
}

.stats-grid {
    max-width: var(--container-max);
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 24px;
    text-align: center;
}

.stat-card {
    background: var(--bg-page);
    border: 1px solid var(--border-soft);
    border-radius: 10px;
    padding: 32px 16px;
}

.stat-number {
    font-size: 40px;
    font-weight: 700;
    color: var(--accent);
}

.stat-label {
    color: var(--text-dim);
    font-size: 14px;
    margin-top: 4px;
}

/* Services */
.services {
    padding: 72px 24px;
    max-width: var(--container-max);
    margin: 0 auto;
}

.services h2 {
    text-align: center;
    font-size: 30px;
    margin: 0 0 40px;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 24px;
}

.service-card {
    border: 1px solid var(--border-soft);
    border-radius: 10px;
    padding: 28px;
    transition: box-shadow 0.15s;
}

.service-card:hover {
    box-shadow: 0 6px 18px rgba(28, 36, 51, 0.1);
}

.service-card h3 {
    margin: 8px 0;
    font-size: 18px;
}

.service-card p {
    margin: 0;
    color: var(--text-dim);
    font-size: 14px;
}

.service-icon {
    font-size: 30px;
}

/* Deployment process */
.process {
    background: var(--bg-soft);
    padding: 72px 24px;
}

.process h2 {
    text-align: center;
    font-size: 30px;
    margin: 0 0 40px;
}

.process-grid {
    max-width: var(--container-max);
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
    gap: 20px;
}

.process-step {
    background: var(--bg-page);
    border: 1px solid var(--border-soft);
    border-radius: 10px;
    padding: 24px 18px;
    text-align: center;
}

.process-step h3 {
    margin: 12px 0 8px;
    font-size: 16px;
}

.process-step p {
    margin: 0;
    color: var(--text-dim);
    font-size: 13px;
}

.step-number {
    width: 36px;
    height: 36px;
    line-height: 36px;
    border-radius: 50%;
    background: var(--accent);
    color: #ffffff;
    font-weight: 700;
    margin: 0 auto;
}

/* Footer info */
.footer {
    background: #1b2a4a;
    color: #d7dce6;
    padding: 56px 24px 24px;
}

.footer-content {
    max-width: var(--container-max);
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 40px;
}

.footer h3 {
    color: #ffffff;
    margin: 0 0 12px;
    font-size: 17px;
}

.footer-info p {
    margin: 0;
    font-size: 14px;
    opacity: 0.85;
}

.social-links {
    display: flex;
    flex-direction: column;
    gap: 8px;
    font-size: 14px;
}

.footer-bottom {
    max-width: var(--container-max);
    margin: 40px auto 0;
    padding-top: 16px;
    border-top: 1px solid rgba(255, 255, 255, 0.15);
    font-size: 13px;
    opacity: 0.7;
}

.footer-bottom p {
    margin: 4px 0;
}

/* Placeholder pages */
.page {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 32px 24px 80px;
}

.page h1 {
    font-size: 34px;
}

.coming-soon-panel {
    background: var(--bg-panel);
    border-radius: 8px;
    padding: 32px;
    margin: 32px 0;
}

.coming-soon-panel h3 {
    margin-top: 0;
}

.coming-soon-list {
    margin: 0;
    padding-left: 22px;
}

.coming-soon-list li {
    margin: 6px 0;
}

/* Responsive */
@media (max-width: 720px) {
    .hero-title {
        font-size: 38px;
    }

    .nav-links {
        gap: 12px;
    }

    .footer-content {
        grid-template-columns: 1fr;
    }
}
"#;
