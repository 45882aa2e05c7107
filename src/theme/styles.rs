//! Global CSS for the deck.
//!
//! Aurora/glassmorphism aesthetic: deep void background, blurred radial
//! gradients drifting behind the content, translucent bordered panels, and
//! purple-to-cyan text gradients. Reveal transitions are driven per-element
//! through inline styles from the motion plan; this sheet only defines the
//! self-running animations (aurora drift, particle float, arrow bounce).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --void: #030014;
  --panel: rgba(255, 255, 255, 0.05);

  --purple: #a78bfa;
  --purple-deep: #7c3aed;
  --purple-glow: rgba(168, 85, 247, 0.3);
  --cyan: #22d3ee;
  --cyan-glow: rgba(34, 211, 238, 0.3);
  --pink: #f472b6;
  --green: #4ade80;
  --yellow: #facc15;
  --blue: #60a5fa;
  --orange: #fb923c;
  --red: #f87171;

  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --text-faint: #6b7280;

  --font-sans: 'Inter', 'Segoe UI', -apple-system, 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

/* === Accent palettes (set per panel/card) === */
.accent-purple { --accent: var(--purple); --accent-soft: rgba(168, 85, 247, 0.3); --accent-faint: rgba(168, 85, 247, 0.1); }
.accent-cyan   { --accent: var(--cyan);   --accent-soft: rgba(34, 211, 238, 0.3);  --accent-faint: rgba(34, 211, 238, 0.1); }
.accent-pink   { --accent: var(--pink);   --accent-soft: rgba(244, 114, 182, 0.3); --accent-faint: rgba(244, 114, 182, 0.1); }
.accent-green  { --accent: var(--green);  --accent-soft: rgba(74, 222, 128, 0.3);  --accent-faint: rgba(74, 222, 128, 0.1); }
.accent-yellow { --accent: var(--yellow); --accent-soft: rgba(250, 204, 21, 0.3);  --accent-faint: rgba(250, 204, 21, 0.1); }
.accent-blue   { --accent: var(--blue);   --accent-soft: rgba(96, 165, 250, 0.3);  --accent-faint: rgba(96, 165, 250, 0.1); }
.accent-orange { --accent: var(--orange); --accent-soft: rgba(251, 146, 60, 0.3);  --accent-faint: rgba(251, 146, 60, 0.1); }
.accent-red    { --accent: var(--red);    --accent-soft: rgba(248, 113, 113, 0.3); --accent-faint: rgba(248, 113, 113, 0.1); }

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--void);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.deck {
  position: relative;
  min-height: 100vh;
}

/* === Aurora Background === */
.aurora-bg {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 0;
}

.aurora-gradient-1,
.aurora-gradient-2,
.aurora-gradient-3 {
  position: absolute;
  width: 60vw;
  height: 60vw;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.25;
  animation: aurora-drift 24s ease-in-out infinite alternate;
}

.aurora-gradient-1 {
  background: radial-gradient(circle, #7c3aed, transparent 70%);
  top: -20vw;
  left: -10vw;
}

.aurora-gradient-2 {
  background: radial-gradient(circle, #0891b2, transparent 70%);
  top: 30vh;
  right: -20vw;
  animation-delay: -8s;
}

.aurora-gradient-3 {
  background: radial-gradient(circle, #db2777, transparent 70%);
  bottom: -20vh;
  left: 20vw;
  animation-delay: -16s;
}

@keyframes aurora-drift {
  from { transform: translate(0, 0) scale(1); }
  to   { transform: translate(8vw, 6vh) scale(1.15); }
}

/* === Scroll Progress Bar === */
.progress-bar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 4px;
  background: linear-gradient(to right, var(--purple-deep), var(--cyan));
  transform-origin: left center;
  z-index: 100;
}

/* === Ambient Particles === */
.particle {
  position: fixed;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  background: var(--purple);
  box-shadow: 0 0 8px var(--purple-glow);
  opacity: 0.5;
  pointer-events: none;
  z-index: 1;
  animation-name: particle-drift;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
  animation-direction: alternate;
}

@keyframes particle-drift {
  from { transform: translate(0, 0); }
  to   { transform: translate(var(--drift-x, 0px), var(--rise, -30px)); }
}

/* === Sections === */
.deck-section {
  position: relative;
  padding: 8rem 1.5rem;
  z-index: 2;
}

.section-inner {
  max-width: 72rem;
  margin: 0 auto;
}

.section-inner.narrow {
  max-width: 56rem;
}

.section-title {
  font-size: 3.25rem;
  font-weight: 600;
  text-align: center;
  margin-bottom: 1rem;
}

.section-subtitle {
  color: var(--text-muted);
  text-align: center;
  max-width: 42rem;
  margin: 0 auto 4rem;
}

.subsection-title {
  font-size: 2rem;
  text-align: center;
  margin-bottom: 1rem;
}

.text-gradient {
  background: linear-gradient(to right, var(--purple), var(--pink), var(--cyan));
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
  color: transparent;
}

.text-gradient-purple-cyan {
  background: linear-gradient(to right, var(--purple), var(--cyan));
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
  color: transparent;
}

.glow {
  box-shadow: 0 0 24px var(--purple-glow);
}

/* === Hero === */
.hero-section {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 0 1.5rem;
}

.hero-content {
  max-width: 64rem;
  margin: 0 auto;
}

.hero-title {
  font-size: clamp(4rem, 10vw, 8rem);
  font-weight: 700;
  margin-bottom: 1.5rem;
  letter-spacing: -0.02em;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.hero-lede {
  font-size: 1.25rem;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  border: 1px solid var(--purple-glow);
  background: rgba(168, 85, 247, 0.1);
  backdrop-filter: blur(8px);
  margin-bottom: 1.5rem;
}

.hero-badge .stack-front { color: #d8b4fe; }
.hero-badge .stack-divider { color: var(--text-faint); }
.hero-badge .stack-back { color: #67e8f9; }

.hero-author {
  color: var(--text-faint);
  margin-top: 2rem;
}

.hero-author .author-name {
  color: #d8b4fe;
}

/* === Glass Cards === */
.glass-card {
  height: 100%;
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid rgba(168, 85, 247, 0.2);
  background: var(--panel);
  backdrop-filter: blur(12px);
  transition: border-color 300ms ease, transform 300ms ease;
  display: flex;
  flex-direction: column;
}

.glass-card:hover {
  border-color: rgba(168, 85, 247, 0.4);
  transform: scale(1.03);
}

.glass-card-icon {
  width: 4rem;
  height: 4rem;
  margin-bottom: 1.5rem;
  border-radius: 0.5rem;
  border: 1px solid rgba(168, 85, 247, 0.3);
  background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(34, 211, 238, 0.2));
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.75rem;
  color: #d8b4fe;
  flex-shrink: 0;
}

.glass-card-title {
  font-size: 1.125rem;
  margin-bottom: 0.75rem;
}

.glass-card-desc {
  color: var(--text-secondary);
  line-height: 1.7;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 2rem;
  margin-bottom: 3rem;
}

/* === Feature Cards === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.5rem;
}

.feature-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--accent-soft);
  background: linear-gradient(135deg, var(--accent-faint), transparent);
  backdrop-filter: blur(12px);
  transition: border-color 300ms ease;
}

.feature-card:hover {
  border-color: var(--accent);
}

.feature-card-glyph {
  font-size: 2rem;
  color: var(--accent);
  margin-bottom: 0.75rem;
  line-height: 1;
}

.feature-card-title {
  font-size: 1.25rem;
  margin-bottom: 0.5rem;
}

.feature-card-desc {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Impact / chips === */
.impact-panel {
  max-width: 48rem;
  margin: 0 auto;
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid var(--accent-soft);
  background: var(--accent-faint);
  backdrop-filter: blur(8px);
}

.impact-title {
  font-size: 1.5rem;
  color: var(--accent);
  margin-bottom: 1rem;
  text-align: center;
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.chip {
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--accent-soft);
  background: var(--accent-faint);
  color: var(--accent);
  font-size: 0.9rem;
}

/* === Before / After comparison === */
.compare-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  max-width: 64rem;
  margin: 3rem auto 0;
}

.compare-panel {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--accent-soft);
  background: var(--accent-faint);
  backdrop-filter: blur(8px);
}

.compare-title {
  font-size: 1.5rem;
  color: var(--accent);
  margin-bottom: 1rem;
  text-align: center;
}

.compare-list {
  list-style: none;
  color: var(--text-muted);
}

.compare-list li {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.compare-mark {
  color: var(--accent);
  flex-shrink: 0;
}

/* === Architecture === */
.arch-layout {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 3rem;
  align-items: start;
}

.arch-canvas {
  position: relative;
  width: 100%;
  max-width: 28rem;
  height: 24rem;
  margin: 0 auto;
}

.arch-logo {
  position: absolute;
  transform: translate(-50%, -50%);
  z-index: 1;
}

.arch-logo-float {
  animation: logo-float var(--float-duration, 4s) ease-in-out infinite;
  animation-delay: var(--float-delay, 0s);
  will-change: transform;
}

@keyframes logo-float {
  0%, 100% { transform: translateY(0); }
  50%      { transform: translateY(-12px); }
}

.arch-logo-box {
  width: 5rem;
  height: 5rem;
  border-radius: 0.5rem;
  border: 1px solid var(--accent-soft);
  background: var(--panel);
  backdrop-filter: blur(12px);
  box-shadow: 0 0 20px var(--accent-faint);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  transition: transform 300ms ease;
}

.arch-logo-box:hover {
  transform: scale(1.1);
}

.arch-logo-glyph {
  font-size: 1.5rem;
  color: var(--accent);
  line-height: 1;
}

.arch-logo-name {
  font-size: 0.7rem;
  font-weight: 600;
  color: var(--accent);
}

.arch-center {
  position: absolute;
  left: 50%;
  top: 50%;
  transform: translate(-50%, -50%);
  z-index: 10;
}

.arch-center-box {
  width: 7rem;
  height: 7rem;
  border-radius: 0.5rem;
  border: 2px solid var(--green);
  background: rgba(74, 222, 128, 0.2);
  backdrop-filter: blur(8px);
  box-shadow: 0 0 24px rgba(74, 222, 128, 0.3);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
}

.arch-center-glyph {
  font-size: 2rem;
  color: #86efac;
  line-height: 1;
}

.arch-center-name {
  font-size: 0.875rem;
  font-weight: 700;
  color: #86efac;
}

.tech-stack {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.tech-item-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: 1.5rem;
  color: var(--accent);
  margin-bottom: 0.75rem;
}

.tech-item-glyph {
  font-size: 1.25rem;
}

.tech-item-list {
  padding-left: 2.25rem;
  color: var(--text-secondary);
}

.tech-item-list p {
  margin-bottom: 0.5rem;
}

/* === Role Tabs === */
.role-tabs {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 3rem;
}

.role-tab {
  padding: 1rem 2rem;
  border-radius: 0.5rem;
  border: 1px solid rgba(168, 85, 247, 0.3);
  background: rgba(168, 85, 247, 0.05);
  color: var(--text-muted);
  font-size: 1rem;
  text-transform: capitalize;
  cursor: pointer;
  transition: all 300ms ease;
}

.role-tab:hover {
  color: var(--text-primary);
  border-color: rgba(168, 85, 247, 0.5);
}

.role-tab.active {
  border-color: var(--purple);
  background: rgba(168, 85, 247, 0.2);
  box-shadow: 0 0 24px var(--purple-glow);
  color: var(--text-primary);
}

.role-chip-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1rem;
  max-width: 56rem;
  margin: 2rem auto 0;
}

.role-chip {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--cyan-glow);
  background: rgba(34, 211, 238, 0.05);
  backdrop-filter: blur(8px);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.role-chip-mark {
  color: var(--cyan);
  flex-shrink: 0;
}

/* === Screenshot placeholder === */
.screenshot-frame {
  position: relative;
  border-radius: 0.5rem;
  border: 2px solid rgba(168, 85, 247, 0.3);
  background: rgba(0, 0, 0, 0.4);
  backdrop-filter: blur(8px);
  overflow: hidden;
}

.screenshot-frame.centered {
  max-width: 56rem;
  margin: 0 auto 3rem;
}

.screenshot-inner {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 300px;
  padding: 2rem;
  background: linear-gradient(135deg, rgba(168, 85, 247, 0.1), rgba(34, 211, 238, 0.1));
  text-align: center;
}

.screenshot-mark {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  border: 2px solid rgba(196, 161, 250, 0.5);
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.screenshot-mark-fill {
  width: 2rem;
  height: 2rem;
  border-radius: 0.25rem;
  background: linear-gradient(135deg, var(--purple), var(--cyan));
  opacity: 0.5;
}

.screenshot-label {
  color: var(--text-muted);
  letter-spacing: 0.08em;
}

/* === Step strip === */
.step-strip {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1rem;
  max-width: 64rem;
  margin: 0 auto;
}

.step-card {
  position: relative;
  padding: 1rem;
  border-radius: 0.5rem;
  border: 1px solid rgba(168, 85, 247, 0.3);
  background: rgba(168, 85, 247, 0.1);
  backdrop-filter: blur(8px);
  text-align: center;
}

.step-index {
  width: 2rem;
  height: 2rem;
  margin: 0 auto 0.5rem;
  border-radius: 50%;
  border: 2px solid var(--purple);
  background: rgba(168, 85, 247, 0.2);
  display: flex;
  align-items: center;
  justify-content: center;
  color: #d8b4fe;
}

.step-label {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.step-connector {
  position: absolute;
  top: 50%;
  right: -0.75rem;
  width: 1rem;
  height: 2px;
  background: rgba(168, 85, 247, 0.5);
  transform: translateY(-50%);
}

/* === Panels (entities / relationships / architecture details) === */
.panel-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
  margin-bottom: 3rem;
}

.detail-panel {
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid var(--accent-soft);
  background: var(--accent-faint);
  backdrop-filter: blur(8px);
}

.detail-panel-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: 1.5rem;
  color: var(--accent);
  margin-bottom: 1.5rem;
}

.detail-list {
  list-style: none;
}

.detail-list li {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  margin-bottom: 1rem;
  color: var(--text-secondary);
}

.detail-mark {
  color: var(--accent);
  flex-shrink: 0;
}

.detail-item-title {
  color: var(--text-primary);
  font-weight: 600;
}

.detail-item-desc {
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-top: 0.25rem;
}

/* === Flow diagrams === */
.flow-diagram {
  max-width: 56rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.diagram-pair {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
  max-width: 72rem;
  margin: 0 auto;
}

.diagram-pair-title {
  font-size: 1.5rem;
  text-align: center;
  margin-bottom: 0.5rem;
}

.diagram-pair-subtitle {
  color: var(--text-muted);
  font-size: 0.875rem;
  text-align: center;
  margin-bottom: 2rem;
}

.flow-stage {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 2px solid var(--accent-soft);
  background: linear-gradient(135deg, var(--accent-faint), transparent);
  backdrop-filter: blur(8px);
}

.flow-stage-title {
  font-size: 1.25rem;
  color: var(--accent);
  text-align: center;
  margin-bottom: 0.5rem;
}

.flow-stage-subtitle {
  font-size: 0.875rem;
  color: var(--text-muted);
  text-align: center;
  margin-bottom: 0.5rem;
}

.flow-lines {
  margin-top: 0.5rem;
}

.flow-lines p {
  font-size: 0.875rem;
  color: var(--text-secondary);
  text-align: center;
  margin-bottom: 0.35rem;
}

.flow-chips {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 0.75rem;
}

.flow-chip {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--accent-faint);
  color: var(--accent);
  font-size: 0.75rem;
}

.flow-code {
  margin-top: 0.75rem;
  padding: 1rem;
  border-radius: 0.5rem;
  background: rgba(0, 0, 0, 0.4);
  overflow-x: auto;
}

.flow-code pre {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--accent);
  text-align: left;
  white-space: pre;
}

.flow-arrow {
  font-size: 1.5rem;
  color: var(--cyan);
  text-align: center;
  animation: arrow-bounce 1s ease-in-out infinite;
  animation-delay: var(--arrow-delay, 0s);
}

@keyframes arrow-bounce {
  0%, 100% { transform: translateY(0); }
  50%      { transform: translateY(6px); }
}

.decision-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
}

.flow-note {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  border: 1px solid var(--cyan-glow);
  background: rgba(34, 211, 238, 0.1);
  backdrop-filter: blur(8px);
  color: #a5f3fc;
  font-size: 0.875rem;
}

.flow-note-wrap {
  text-align: center;
  margin: 2rem 0;
}

/* === Security & performance === */
.security-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 3rem;
}

.security-column-title {
  font-size: 1.875rem;
  color: var(--accent);
  margin-bottom: 2rem;
}

.security-item {
  display: flex;
  gap: 1rem;
  padding: 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--accent-soft);
  background: var(--accent-faint);
  backdrop-filter: blur(8px);
  margin-bottom: 1.5rem;
}

.security-item-glyph {
  font-size: 1.5rem;
  color: var(--accent);
  flex-shrink: 0;
}

.security-item-title {
  margin-bottom: 0.25rem;
}

.security-item-desc {
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Feature deep dive === */
.deep-dive-row {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 3rem;
  align-items: center;
}

.deep-dive-row + .deep-dive-row {
  margin-top: 8rem;
}

.deep-dive-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.deep-dive-glyph {
  font-size: 2rem;
  color: var(--accent);
}

.deep-dive-title {
  font-size: 2.25rem;
}

.deep-dive-desc {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.bullet-list {
  list-style: none;
  color: var(--text-muted);
}

.bullet-list li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.bullet-dot {
  width: 0.375rem;
  height: 0.375rem;
  border-radius: 50%;
  background: var(--accent);
  flex-shrink: 0;
}

/* === Technical excellence === */
.highlight-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1.5rem;
  margin-bottom: 4rem;
}

.quality-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.5rem;
}

.quality-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--accent-soft);
  background: var(--accent-faint);
  backdrop-filter: blur(8px);
  text-align: center;
}

.quality-card-glyph {
  font-size: 2.5rem;
  color: var(--accent);
  margin-bottom: 1rem;
}

.quality-card-title {
  margin-bottom: 0.5rem;
}

.quality-card-desc {
  color: var(--text-muted);
  font-size: 0.875rem;
}

.api-panel {
  max-width: 64rem;
  margin: 4rem auto 0;
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid rgba(96, 165, 250, 0.3);
  background: rgba(96, 165, 250, 0.1);
  backdrop-filter: blur(8px);
}

.api-panel-title {
  font-size: 1.875rem;
  color: #93c5fd;
  text-align: center;
  margin-bottom: 1.5rem;
}

.api-sample-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
}

.api-sample-title {
  margin-bottom: 1rem;
}

.code-sample {
  padding: 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--accent-soft);
  background: rgba(0, 0, 0, 0.3);
  font-family: var(--font-mono);
  font-size: 0.875rem;
}

.code-sample .code-comment { color: var(--green); }
.code-sample .code-line { color: var(--text-secondary); }
.code-sample .indent { padding-left: 1rem; }

/* === Count-up widgets === */
.outcome-grid {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 2rem;
}

.count-up {
  text-align: center;
}

.count-up-value {
  font-size: 3rem;
  font-weight: 600;
  background: linear-gradient(to right, #d8b4fe, #67e8f9);
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
  color: transparent;
  margin-bottom: 0.5rem;
}

.count-up-label {
  color: var(--text-muted);
}

/* === Roadmap timeline === */
.timeline {
  position: relative;
}

.timeline-line {
  position: absolute;
  left: 50%;
  top: 0;
  bottom: 0;
  width: 2px;
  background: linear-gradient(to bottom, var(--purple-deep), var(--cyan), var(--pink));
  transform: translateX(-50%);
}

.timeline-items {
  display: flex;
  flex-direction: column;
  gap: 4rem;
}

.timeline-item {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.timeline-item.reversed {
  flex-direction: row-reverse;
}

.timeline-slot {
  flex: 1;
  text-align: right;
}

.timeline-item.reversed .timeline-slot {
  text-align: left;
}

.timeline-card {
  display: inline-block;
  padding: 1.5rem;
  border-radius: 0.75rem;
  border: 1px solid rgba(168, 85, 247, 0.3);
  background: rgba(168, 85, 247, 0.1);
  backdrop-filter: blur(8px);
}

.timeline-card-title {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.timeline-card-desc {
  color: var(--text-muted);
}

.timeline-node {
  position: relative;
  z-index: 10;
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  border: 2px solid var(--purple);
  background: rgba(168, 85, 247, 0.2);
  backdrop-filter: blur(8px);
  box-shadow: 0 0 24px var(--purple-glow);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  color: #d8b4fe;
  flex-shrink: 0;
}

.timeline-spacer {
  flex: 1;
}

/* === Conclusion === */
.conclusion-section {
  border-top: 1px solid rgba(168, 85, 247, 0.2);
  text-align: center;
}

.summary-panel {
  margin: 0 auto 4rem;
  padding: 2rem;
  border-radius: 0.75rem;
  border: 1px solid rgba(168, 85, 247, 0.3);
  background: rgba(168, 85, 247, 0.1);
  backdrop-filter: blur(8px);
}

.summary-panel-title {
  font-size: 1.875rem;
  color: #d8b4fe;
  margin-bottom: 1.5rem;
}

.summary-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
  text-align: left;
}

.summary-item {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.summary-mark {
  color: var(--green);
  font-size: 1.25rem;
  flex-shrink: 0;
}

.repo-link {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  border: 1px solid rgba(168, 85, 247, 0.3);
  background: rgba(168, 85, 247, 0.1);
  color: var(--text-secondary);
  text-decoration: none;
  transition: all 300ms ease;
}

.repo-link:hover {
  border-color: var(--purple);
  background: rgba(168, 85, 247, 0.2);
  color: var(--text-primary);
}

.thanks {
  font-size: 4rem;
  margin: 4rem 0 1.5rem;
}

.qa-line {
  color: var(--text-muted);
  font-size: 1.25rem;
  margin-bottom: 2rem;
}

.credit-line {
  color: var(--text-faint);
  margin-top: 3rem;
}

/* === Narrow viewports === */
@media (max-width: 900px) {
  .card-grid,
  .feature-grid,
  .quality-grid {
    grid-template-columns: repeat(1, minmax(0, 1fr));
  }

  .panel-grid,
  .compare-grid,
  .security-grid,
  .arch-layout,
  .deep-dive-row,
  .diagram-pair,
  .api-sample-grid,
  .summary-grid,
  .decision-grid {
    grid-template-columns: repeat(1, minmax(0, 1fr));
  }

  .role-chip-grid,
  .step-strip,
  .highlight-grid,
  .outcome-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .section-title {
    font-size: 2.25rem;
  }
}
"#;
