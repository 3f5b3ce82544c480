pub const BASE_COMPONENTS: &str = r#"
/* Layout helpers */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.container.narrow {
  max-width: var(--narrow-width);
}

.stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.surface-alt {
  background-color: var(--surface-alt);
}

.gradient-text {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  border: 2px solid transparent;
  border-radius: var(--radius-lg);
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  transition: transform var(--transition) var(--easing-standard),
    box-shadow var(--transition) var(--easing-standard);
}

.btn:hover {
  transform: scale(1.05);
  text-decoration: none;
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
}

.btn-primary {
  background: var(--gradient);
  color: #FFFFFF;
  box-shadow: var(--shadow-xl);
}

.btn-primary:hover {
  box-shadow: var(--shadow-2xl);
}

.btn-secondary {
  background-color: var(--surface);
  color: var(--text-primary);
  border-color: var(--border);
  box-shadow: var(--shadow-lg);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  padding: var(--space-8);
  box-shadow: var(--shadow-xl);
  backdrop-filter: blur(4px);
}

.gradient-frame {
  background: var(--gradient-diag);
  border-radius: var(--radius-xl);
  padding: var(--space-1);
  box-shadow: var(--shadow-2xl);
}

/* Tags */
.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.tag {
  padding: 6px var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
}

.tag-hover {
  transition: background-color var(--transition) var(--easing-standard);
}

.tag-hover:hover {
  background-color: rgba(59, 130, 246, 0.15);
}

/* Icons */
.icon {
  display: inline-flex;
  width: 24px;
  height: 24px;
  flex-shrink: 0;
}

.icon svg {
  width: 100%;
  height: 100%;
  fill: none;
  stroke: currentColor;
  stroke-width: 2;
  stroke-linecap: round;
  stroke-linejoin: round;
}

.icon.icon-xl {
  width: 48px;
  height: 48px;
}

.icon.accent {
  color: var(--accent-text);
}

.icon.muted {
  color: var(--slate-400);
}

.icon.nudge {
  transition: transform var(--transition) var(--easing-standard);
}

a:hover .icon.nudge,
button:hover .icon.nudge {
  transform: translateX(4px);
}
"#;
