pub const SECTION_STYLES: &str = r#"
/* Page shell */
.page {
  min-height: 100vh;
  background: var(--page-bg);
  color: var(--text-primary);
  transition: background var(--transition), color var(--transition);
}

/* Navigation */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: transparent;
  transition: all var(--transition) var(--easing-standard);
}

.site-nav.scrolled {
  background-color: var(--nav-scrolled);
  backdrop-filter: blur(24px);
  box-shadow: var(--shadow-lg);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--nav-height);
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.brand-name {
  font-size: 1.25rem;
  font-weight: 700;
}

.monogram {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-md);
  background: var(--gradient-diag);
  color: #FFFFFF;
  font-weight: 700;
  font-size: 1.25rem;
  box-shadow: var(--shadow-lg);
}

.monogram.small {
  width: 32px;
  height: 32px;
  font-size: 1rem;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.site-nav-link {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition);
}

.site-nav-link:hover,
.site-nav-link.active {
  color: var(--accent-text);
}

.theme-toggle {
  background: none;
  border: none;
  cursor: pointer;
  padding: var(--space-2);
  border-radius: var(--radius-md);
  transition: background-color var(--transition);
}

.theme-toggle:hover {
  background-color: var(--surface-muted);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }
}

/* Hero */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  padding-top: 80px;
  text-align: center;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  overflow: hidden;
}

.blob {
  position: absolute;
  width: 384px;
  height: 384px;
  border-radius: var(--radius-full);
  filter: blur(64px);
  animation: pulse 4s ease-in-out infinite;
}

.blob-left {
  top: 25%;
  left: 25%;
  background-color: rgba(59, 130, 246, 0.1);
}

.blob-right {
  bottom: 25%;
  right: 25%;
  background-color: rgba(99, 102, 241, 0.1);
  animation-duration: 6s;
  animation-delay: 1s;
}

.hero-content {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.hero-title {
  font-size: 4.5rem;
  font-weight: 900;
  line-height: 1.1;
}

.hero-subtitle {
  font-size: 1.875rem;
  font-weight: 700;
  margin-top: var(--space-4);
}

.hero-tagline {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 48rem;
  margin: var(--space-4) auto 0;
}

.hero-actions,
.hero-socials {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
}

.hero-socials {
  gap: var(--space-6);
}

.social-link {
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-secondary);
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition);
}

.social-link:hover {
  transform: scale(1.1);
}

.social-link.brand-blue {
  color: var(--primary);
}

.scroll-indicator {
  position: absolute;
  bottom: 40px;
  left: 50%;
  width: 24px;
  height: 40px;
  margin-left: -12px;
  border: 2px solid var(--slate-400);
  border-radius: var(--radius-full);
  display: flex;
  justify-content: center;
  padding: var(--space-2);
  animation: bounce 1s infinite;
}

.scroll-indicator-dot {
  width: 6px;
  height: 6px;
  border-radius: var(--radius-full);
  background-color: var(--slate-400);
}

/* Stats */
.stats-section {
  padding: 80px 0;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-8);
}

.stat-card {
  text-align: center;
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
  transition: transform var(--transition);
}

.stat-card:hover {
  transform: scale(1.05);
}

.stat-value {
  font-size: 3rem;
  font-weight: 900;
}

.stat-label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

@media (max-width: 768px) {
  .stats-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

/* Shared section chrome */
.page-section {
  padding: var(--space-32) 0;
  position: relative;
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 3rem;
  font-weight: 900;
  margin-bottom: var(--space-4);
}

.section-rule {
  width: 96px;
  height: 6px;
  margin: 0 auto;
  border-radius: var(--radius-full);
  background: var(--gradient);
}

.section-subtitle {
  font-size: 1.25rem;
  color: var(--text-muted);
  margin-top: var(--space-6);
}

/* About */
.about-lead {
  font-size: 1.5rem;
  font-weight: 600;
  line-height: 1.6;
  margin-bottom: var(--space-6);
}

.about-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  font-size: 1.125rem;
  line-height: 1.7;
  color: var(--text-secondary);
}

.highlight-card {
  display: flex;
  align-items: flex-start;
  gap: var(--space-6);
  padding: var(--space-12);
  border-radius: var(--radius-xl);
  background: var(--gradient);
  color: #FFFFFF;
  box-shadow: var(--shadow-xl);
}

.highlight-body h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.highlight-body p {
  font-size: 1.125rem;
  line-height: 1.7;
  color: #EFF6FF;
}

/* Projects */
.project-card {
  border-radius: var(--radius-xl);
  background-color: var(--surface);
  box-shadow: var(--shadow-xl);
  overflow: hidden;
  transition: box-shadow var(--transition);
}

.project-card:hover {
  box-shadow: var(--shadow-2xl);
}

.project-card.featured {
  background: var(--gradient-diag);
  padding: var(--space-1);
}

.project-inner {
  border-radius: var(--radius-xl);
  padding: 40px;
}

.project-inner.framed {
  background-color: #FFFFFF;
}

.portfolio.dark .project-inner.framed {
  background-color: var(--slate-900);
}

.project-header {
  margin-bottom: var(--space-6);
}

.project-badges {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-2);
}

.project-badge {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  background-color: var(--slate-200);
  color: var(--slate-700);
}

.portfolio.dark .project-badge {
  background-color: var(--slate-700);
  color: var(--slate-300);
}

.project-badge.featured,
.portfolio.dark .project-badge.featured {
  background: var(--gradient);
  color: #FFFFFF;
}

.project-badge.star,
.portfolio.dark .project-badge.star {
  background-color: #FACC15;
  color: #713F12;
}

.project-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.project-affiliation {
  color: var(--accent-text);
  font-weight: 500;
}

.project-description {
  font-size: 1.125rem;
  line-height: 1.7;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.project-impact {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  margin-bottom: var(--space-6);
}

.impact-row {
  display: flex;
  align-items: flex-start;
  gap: var(--space-3);
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
}

.skill-card {
  transition: transform var(--transition), box-shadow var(--transition);
}

.skill-card:hover {
  transform: scale(1.05);
  box-shadow: var(--shadow-2xl);
}

.skill-header {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.skill-icon {
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  background: var(--gradient-diag);
  color: #FFFFFF;
}

.skill-category {
  font-size: 1.25rem;
  font-weight: 700;
}

.skill-proficiency {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--accent-text);
}

@media (max-width: 768px) {
  .skills-grid {
    grid-template-columns: 1fr;
  }
}

/* Contact */
.contact-panel {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-8);
  padding: var(--space-12);
  border-radius: var(--radius-xl);
  background-color: #FFFFFF;
}

.portfolio.dark .contact-panel {
  background-color: var(--slate-900);
}

.contact-column {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.contact-column h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.contact-row,
.profile-link {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
  color: var(--text-primary);
  transition: background-color var(--transition);
}

.contact-row.interactive:hover,
.profile-link:hover {
  background-color: rgba(59, 130, 246, 0.1);
  text-decoration: none;
}

.contact-label {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.contact-value {
  font-weight: 600;
}

.profile-link {
  justify-content: space-between;
}

.profile-link-name {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  font-weight: 600;
}

.profile-link.primary {
  background: var(--gradient);
  color: #FFFFFF;
}

.availability {
  padding-top: var(--space-6);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

@media (max-width: 768px) {
  .contact-panel {
    grid-template-columns: 1fr;
  }
}

/* Footer */
.site-footer {
  padding: var(--space-12) 0;
  background-color: var(--slate-900);
  color: #FFFFFF;
  text-align: center;
}

.portfolio.dark .site-footer {
  background-color: #000000;
}

.footer-brand {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
  font-weight: 700;
  font-size: 1.125rem;
}

.footer-tagline {
  color: var(--slate-400);
  margin-bottom: var(--space-4);
}

.footer-copyright {
  font-size: 0.875rem;
  color: var(--slate-500);
}
"#;

pub const ANIMATIONS: &str = r#"
@keyframes fadeInUp {
  from {
    opacity: 0;
    transform: translateY(30px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes pulse {
  50% {
    opacity: 0.5;
  }
}

@keyframes bounce {
  0%, 100% {
    transform: translateY(-25%);
    animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
  }
  50% {
    transform: none;
    animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
  }
}

.fade-in-up {
  animation: fadeInUp 1s ease-out both;
}
"#;
