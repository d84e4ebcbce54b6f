//! CSS for the landing page.
//!
//! Light theme with a blue accent. Below 768px the desktop navigation and
//! auth actions are hidden and the menu toggle takes their place.

/// Complete stylesheet, inlined into the server-rendered document and
/// injected once by the browser build.
pub const LANDING_CSS: &str = r#"
:root {
    --bg-white: #ffffff;
    --bg-muted: #f9fafb;
    --text-strong: #111827;
    --text-body: #4b5563;
    --text-soft: #6b7280;
    --border: #e5e7eb;
    --accent: #2563eb;
    --accent-dark: #1d4ed8;
    --accent-soft: #dbeafe;
    --star: #facc15;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1200px;
    --radius: 12px;
    --header-height: 64px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-white);
    color: var(--text-body);
    line-height: 1.6;
    margin: 0;
}

img {
    display: block;
    max-width: 100%;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.page {
    min-height: 100vh;
}

.section {
    padding: 80px 0;
    scroll-margin-top: var(--header-height);
}

.section-muted {
    background: var(--bg-muted);
}

.section-accent {
    background: var(--accent);
}

.section-heading {
    text-align: center;
    margin-bottom: 64px;
}

.section-heading h2 {
    font-size: 2.5rem;
    color: var(--text-strong);
    margin: 0 0 16px;
}

.section-heading p {
    font-size: 1.25rem;
    max-width: 640px;
    margin: 0 auto;
}

.section-actions {
    text-align: center;
    margin-top: 48px;
}

.card-grid {
    display: grid;
    gap: 32px;
    grid-template-columns: 1fr;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: 8px;
    border: 1px solid transparent;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
    padding: 10px 20px;
    transition: background 0.2s, color 0.2s;
}

.btn-sm { padding: 6px 14px; font-size: 0.875rem; }
.btn-lg { padding: 14px 28px; font-size: 1.05rem; }
.btn-block { width: 100%; }

.btn-primary {
    background: var(--accent);
    color: var(--bg-white);
}

.btn-primary:hover {
    background: var(--accent-dark);
}

.btn-outline {
    background: var(--bg-white);
    border-color: var(--border);
    color: var(--text-strong);
}

.btn-outline:hover {
    border-color: var(--accent);
    color: var(--accent);
}

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--border);
}

.header-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: var(--header-height);
}

.brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.brand-mark {
    color: var(--accent);
}

.brand-name {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text-strong);
}

.desktop-nav {
    display: flex;
    align-items: center;
    gap: 32px;
}

.nav-link {
    color: var(--text-body);
    text-decoration: none;
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--accent);
}

.auth-actions {
    display: flex;
    align-items: center;
    gap: 16px;
}

.user-menu-slot {
    display: flex;
    align-items: center;
    justify-content: center;
}

.user-avatar {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    background: var(--accent-soft);
    color: var(--accent);
    font-weight: 700;
}

.menu-toggle {
    display: none;
    background: none;
    border: none;
    padding: 8px;
    color: var(--text-strong);
    cursor: pointer;
}

.mobile-menu {
    padding: 16px 0;
    border-top: 1px solid var(--border);
}

.mobile-nav {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.mobile-actions {
    flex-direction: column;
    align-items: stretch;
    gap: 8px;
    padding-top: 16px;
}

.mobile-actions .btn {
    width: 100%;
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    scroll-margin-top: var(--header-height);
}

.hero-background {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
}

.hero-content {
    position: relative;
    z-index: 1;
    text-align: center;
    max-width: 960px;
}

.hero-title {
    font-size: 3.5rem;
    line-height: 1.1;
    color: var(--bg-white);
    margin: 0 0 24px;
}

.hero-title-accent {
    display: block;
    color: #60a5fa;
}

.hero-description {
    font-size: 1.35rem;
    color: #e5e7eb;
    max-width: 640px;
    margin: 0 auto 48px;
}

.search-panel {
    background: var(--bg-white);
    border-radius: 16px;
    padding: 32px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.search-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 16px;
    margin-bottom: 24px;
}

.search-field {
    position: relative;
    display: flex;
    align-items: center;
}

.search-field-icon {
    position: absolute;
    left: 12px;
    color: #9ca3af;
    pointer-events: none;
}

.search-input,
.search-select {
    width: 100%;
    height: 48px;
    padding: 0 12px 0 40px;
    border: 1px solid var(--border);
    border-radius: 8px;
    font: inherit;
    color: var(--text-strong);
    background: var(--bg-white);
}

.search-button {
    height: 48px;
}

.search-highlights {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 16px;
    font-size: 0.875rem;
}

.search-highlight {
    display: inline-flex;
    align-items: center;
    gap: 8px;
}

.highlight-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
}

.dot-0 { background: #22c55e; }
.dot-1 { background: #3b82f6; }
.dot-2 { background: #a855f7; }

.scroll-indicator {
    position: absolute;
    bottom: 32px;
    left: 50%;
    transform: translateX(-50%);
    animation: bounce 1s infinite;
}

.scroll-indicator-track {
    width: 24px;
    height: 40px;
    border: 2px solid var(--bg-white);
    border-radius: 999px;
    display: flex;
    justify-content: center;
}

.scroll-indicator-thumb {
    width: 4px;
    height: 12px;
    margin-top: 8px;
    background: var(--bg-white);
    border-radius: 999px;
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); }
    50% { transform: translate(-50%, 0); }
}

/* Cards */
.card {
    background: var(--bg-white);
    border-radius: var(--radius);
    border: 1px solid var(--border);
    overflow: hidden;
    transition: box-shadow 0.3s, transform 0.3s;
}

.card:hover {
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}

.card-body {
    padding: 24px;
}

.badge {
    display: inline-block;
    border-radius: 999px;
    padding: 2px 10px;
    font-size: 0.75rem;
    font-weight: 600;
}

.badge-featured {
    background: var(--accent);
    color: var(--bg-white);
}

.badge-secondary {
    background: #f3f4f6;
    color: var(--text-strong);
}

/* Properties */
.property-card:hover {
    transform: translateY(-8px);
}

.property-media {
    position: relative;
    overflow: hidden;
}

.property-image {
    width: 100%;
    height: 192px;
    object-fit: cover;
    transition: transform 0.3s;
}

.property-card:hover .property-image {
    transform: scale(1.1);
}

.property-badges {
    position: absolute;
    top: 16px;
    left: 16px;
    display: flex;
    gap: 8px;
}

.favorite-button {
    position: absolute;
    top: 16px;
    right: 16px;
    padding: 8px;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.9);
    color: var(--text-soft);
    cursor: pointer;
}

.favorite-button:hover {
    color: #ef4444;
}

.property-location {
    display: flex;
    align-items: center;
    gap: 4px;
    font-size: 0.875rem;
    color: var(--text-soft);
    margin-bottom: 8px;
}

.property-title {
    font-size: 1.125rem;
    color: var(--text-strong);
    margin: 0 0 8px;
}

.property-card:hover .property-title {
    color: var(--accent);
}

.property-price {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--accent);
    margin-bottom: 16px;
}

.property-facts {
    display: flex;
    justify-content: space-between;
    font-size: 0.875rem;
    color: var(--text-soft);
    margin-bottom: 16px;
}

.property-fact {
    display: inline-flex;
    align-items: center;
    gap: 4px;
}

/* Services */
.service-card {
    text-align: center;
    padding: 32px 24px;
}

.service-card:hover {
    transform: translateY(-4px);
}

.service-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto 16px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--accent-soft);
    color: var(--accent);
    transition: background 0.2s, color 0.2s;
}

.service-card:hover .service-icon {
    background: var(--accent);
    color: var(--bg-white);
}

.service-title {
    font-size: 1.25rem;
    color: var(--text-strong);
    margin: 0 0 12px;
}

/* Stats */
.stat-card {
    text-align: center;
    padding: 32px;
    background: rgba(255, 255, 255, 0.1);
    border-color: rgba(255, 255, 255, 0.2);
}

.stat-card:hover {
    background: rgba(255, 255, 255, 0.2);
}

.stat-number {
    font-size: 3rem;
    font-weight: 700;
    color: var(--bg-white);
}

.stat-label {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--accent-soft);
}

.stat-description {
    font-size: 0.875rem;
    color: #bfdbfe;
}

/* Testimonials */
.testimonial-card {
    padding: 32px;
}

.rating {
    display: flex;
    gap: 2px;
    margin-bottom: 16px;
}

.star {
    color: var(--star);
}

.testimonial-quote {
    font-style: italic;
    margin: 0 0 24px;
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 16px;
}

.avatar {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    object-fit: cover;
}

.author-name {
    font-weight: 600;
    color: var(--text-strong);
}

.author-role {
    font-size: 0.875rem;
    color: var(--text-soft);
}

/* Contact */
.contact-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

.contact-item {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    padding: 24px;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    color: var(--text-strong);
    text-decoration: none;
}

.contact-item svg {
    color: var(--accent);
}

/* Footer */
.site-footer {
    background: var(--text-strong);
    color: #d1d5db;
    padding: 48px 0;
    text-align: center;
}

.footer-brand {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
}

.footer-title {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--bg-white);
}

.footer-links {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 24px;
    margin-bottom: 16px;
}

.footer-links .nav-link {
    color: #d1d5db;
}

.footer-copyright {
    font-size: 0.875rem;
    margin: 0;
}

/* Responsive */
@media (min-width: 768px) {
    .grid-3 { grid-template-columns: repeat(2, 1fr); }
    .grid-4 { grid-template-columns: repeat(2, 1fr); }
    .search-grid { grid-template-columns: repeat(4, 1fr); }
    .contact-grid { grid-template-columns: repeat(3, 1fr); }
    .hero-title { font-size: 4.5rem; }
    .section-heading h2 { font-size: 3rem; }
}

@media (min-width: 1024px) {
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); }
}

@media (max-width: 767px) {
    .desktop-nav,
    .desktop-actions {
        display: none;
    }

    .menu-toggle {
        display: inline-flex;
    }
}

@media (min-width: 768px) {
    .mobile-menu {
        display: none;
    }
}
"#;
