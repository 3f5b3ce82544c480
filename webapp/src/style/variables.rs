// design tokens
//
// light values live on .portfolio, the dark overrides on .portfolio.dark; components only
// ever reference the variables
pub const CSS_VARIABLES: &str = r#"
.portfolio {
  /* Brand */
  --primary: #2563EB;
  --primary-strong: #1D4ED8;
  --indigo: #4F46E5;
  --purple: #9333EA;
  --gradient: linear-gradient(90deg, var(--primary), var(--indigo));
  --gradient-diag: linear-gradient(135deg, var(--primary), var(--indigo));

  /* Neutrals (slate) */
  --slate-50: #F8FAFC;
  --slate-100: #F1F5F9;
  --slate-200: #E2E8F0;
  --slate-300: #CBD5E1;
  --slate-400: #94A3B8;
  --slate-500: #64748B;
  --slate-600: #475569;
  --slate-700: #334155;
  --slate-800: #1E293B;
  --slate-900: #0F172A;
  --slate-950: #020617;

  /* Surfaces */
  --page-bg: linear-gradient(135deg, var(--slate-50), #EFF6FF, var(--slate-100));
  --surface: #FFFFFF;
  --surface-alt: #FFFFFF;
  --surface-muted: var(--slate-100);
  --nav-scrolled: rgba(255, 255, 255, 0.8);

  /* Text */
  --text-primary: var(--slate-900);
  --text-secondary: var(--slate-600);
  --text-muted: var(--slate-500);
  --accent-text: var(--primary);

  /* Borders */
  --border: var(--slate-200);

  /* Layout */
  --container-width: 1280px;
  --narrow-width: 1024px;
  --nav-height: 72px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-32: 128px;

  /* Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
  --shadow-2xl: 0 25px 50px -12px rgba(0, 0, 0, 0.25);

  /* Animation */
  --transition: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

.portfolio.dark {
  --page-bg: linear-gradient(135deg, var(--slate-950), #172554, var(--slate-900));
  --surface: rgba(30, 41, 59, 0.5);
  --surface-alt: rgba(15, 23, 42, 0.5);
  --surface-muted: var(--slate-800);
  --nav-scrolled: rgba(15, 23, 42, 0.8);

  --text-primary: #FFFFFF;
  --text-secondary: var(--slate-300);
  --text-muted: var(--slate-400);
  --accent-text: #60A5FA;

  --border: var(--slate-700);
}"#;
