//! Global CSS styles for Volt.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #0b0d12;
  --surface: #141821;
  --surface-raised: #1b2130;
  --border: #262d3d;

  --primary: #6366f1;
  --primary-hover: #818cf8;
  --primary-glow: rgba(99, 102, 241, 0.35);

  --text-primary: #f4f5f7;
  --text-secondary: rgba(244, 245, 247, 0.72);
  --text-muted: rgba(244, 245, 247, 0.5);

  --success: #22c55e;
  --warning: #f59e0b;
  --danger: #ef4444;

  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
  --radius: 0.75rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

body {
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.6rem 1.2rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:hover:not(:disabled) { background: var(--primary-hover); box-shadow: 0 0 18px var(--primary-glow); }
.btn-outline { background: transparent; color: var(--text-primary); border-color: var(--border); }
.btn-outline:hover:not(:disabled) { border-color: var(--primary); }
.btn-ghost { background: transparent; color: var(--text-secondary); }
.btn-ghost:hover:not(:disabled) { color: var(--text-primary); }
.btn-danger { background: transparent; color: var(--danger); border-color: var(--danger); }

/* === Inputs === */
.input-label { display: block; margin: 1rem 0 0.35rem; font-size: 0.85rem; color: var(--text-secondary); }
.input-field {
  width: 100%;
  padding: 0.6rem 0.8rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  font: inherit;
}
.input-field:focus { outline: none; border-color: var(--primary); box-shadow: 0 0 0 3px var(--primary-glow); }
.form-error { margin-top: 0.75rem; color: var(--danger); font-size: 0.85rem; }
.form-status { margin-top: 0.75rem; color: var(--success); font-size: 0.85rem; }

/* === Landing === */
.landing { min-height: 100vh; display: flex; flex-direction: column; gap: 4rem; padding: 1.5rem 2rem 3rem; }
.landing-header { display: flex; justify-content: space-between; align-items: center; }
.brand, .sidebar-brand { font-size: 1.5rem; font-weight: 800; color: var(--primary); }
.hero { text-align: center; display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
.hero-title { font-size: 3rem; line-height: 1.15; }
.hero-subtitle { max-width: 36rem; color: var(--text-secondary); }
.hero-typewriter { display: inline-block; min-width: 280px; color: var(--primary); }
.typewriter-cursor { animation: volt-blink 1s step-end infinite; }
@keyframes volt-blink { 50% { opacity: 0; } }
.section-label { text-align: center; color: var(--text-muted); margin-bottom: 1rem; }
.features { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; }
.feature-card { background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 1.25rem; }
.feature-card p { color: var(--text-secondary); margin-top: 0.5rem; }
.landing-footer { display: flex; justify-content: center; }

/* === Marquee === */
.marquee { position: relative; width: 100%; overflow: hidden; padding: 0.75rem 0; }
.marquee-track { display: inline-flex; white-space: nowrap; }
.marquee-copy { display: flex; gap: 3rem; padding-right: 3rem; }
.partner { font-size: 1.25rem; font-weight: 700; color: var(--text-secondary); }
.partner-muted { color: var(--text-muted); font-weight: 500; }

/* === Auth pages === */
.auth-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; }
.auth-card { width: 100%; max-width: 26rem; background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 2rem; display: flex; flex-direction: column; gap: 0.25rem; }
.auth-card .btn { margin-top: 1rem; }
.input-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
.auth-title { font-size: 1.75rem; }
.auth-subtitle { color: var(--text-secondary); }

/* === Dashboard chrome === */
.guard-loading { height: 100vh; display: flex; align-items: center; justify-content: center; }
.dashboard-shell { display: flex; min-height: 100vh; }
.sidebar { width: 15rem; flex-shrink: 0; display: flex; flex-direction: column; gap: 2rem; padding: 1.5rem 1rem; background: var(--surface); border-right: 1px solid var(--border); }
.sidebar-nav { display: flex; flex-direction: column; gap: 0.25rem; flex: 1; }
.nav-link { padding: 0.5rem 0.75rem; border-radius: var(--radius); color: var(--text-secondary); }
.nav-link:hover { color: var(--text-primary); background: var(--surface-raised); }
.nav-link.active { color: #fff; background: var(--primary); }
.dashboard-main { flex: 1; display: flex; flex-direction: column; min-width: 0; }
.dashboard-header { padding: 1.25rem 2rem; border-bottom: 1px solid var(--border); }
.header-greeting { font-size: 1.25rem; }
.header-date { color: var(--text-muted); font-size: 0.85rem; }
.dashboard-page { flex: 1; overflow: auto; padding: 2rem; animation: volt-rise 300ms ease both; }
@keyframes volt-rise { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: none; } }
.page-title { font-size: 1.5rem; margin-bottom: 1.25rem; }

/* === Dashboard pages === */
.overview-intro { color: var(--text-secondary); min-height: 1.5em; margin-bottom: 1.5rem; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; }
.stat-card { background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 1.25rem; display: flex; flex-direction: column; }
.stat-value { font-size: 2rem; font-weight: 800; }
.stat-label { color: var(--text-muted); }
.quick-links { display: flex; gap: 0.75rem; margin-top: 1.5rem; }
.booking-list { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.booking-row { display: grid; grid-template-columns: 2fr 2fr auto; gap: 1rem; align-items: center; background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 0.9rem 1.1rem; }
.booking-when { color: var(--text-secondary); }
.booking-title { font-size: 0.85rem; color: var(--text-secondary); }
.bookings-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.booking-form { max-width: 32rem; background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 1.5rem; }
.booking-form .btn { margin-top: 1rem; margin-right: 0.5rem; }
.booking-empty { color: var(--text-secondary); }
.badge { font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 9999px; text-transform: capitalize; }
.badge-confirmed { background: rgba(34, 197, 94, 0.15); color: var(--success); }
.badge-pending { background: rgba(245, 158, 11, 0.15); color: var(--warning); }
.badge-completed { background: var(--surface-raised); color: var(--text-secondary); }
.badge-cancelled { background: rgba(239, 68, 68, 0.15); color: var(--danger); }
.settings { display: flex; flex-direction: column; gap: 1.5rem; max-width: 32rem; }
.settings-card { background: var(--surface); border: 1px solid var(--border); border-radius: var(--radius); padding: 1.5rem; }
.settings-card .btn { margin-top: 1rem; }

/* === Chat === */
.chat { display: flex; flex-direction: column; height: 100%; }
.chat-log { flex: 1; display: flex; flex-direction: column; gap: 0.75rem; overflow-y: auto; padding-bottom: 1rem; }
.chat-bubble { max-width: 70%; padding: 0.75rem 1rem; border-radius: var(--radius); white-space: pre-wrap; }
.chat-bubble.user { align-self: flex-end; background: var(--primary); color: #fff; }
.chat-bubble.assistant { align-self: flex-start; background: var(--surface); border: 1px solid var(--border); }
.chat-input { display: flex; gap: 0.75rem; }
"#;
