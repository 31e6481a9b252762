//! Raw Tera templates, registered once per [`crate::Renderer`].

pub(crate) const WELCOME: &str = r#"
  Emergency Department
  Daily Data Simulator

  A comprehensive tool for healthcare professionals to input, simulate, and
  visualize critical emergency department metrics across multiple hospital
  facilities.

{% for card in features -%}
  * {{ card.title }}: {{ card.description }}
{% endfor %}
  Type `start` to begin daily data entry.

  Designed for healthcare simulation and training purposes
"#;

pub(crate) const SELECTION: &str = r#"
  Select Hospital
  Choose the hospital facility for which you are entering data:

{% for h in hospitals -%}
  {{ h.position }}. {{ h.marker }} {{ h.name }} {{ h.icon }}  {{ h.kind }}
       {{ h.description }}
{% endfor %}
  Type `select <name|number>` to choose, or `back`.
"#;

pub(crate) const FORM: &str = r#"
  Data Entry Form {{ hospital.icon }}
  Entering data for {{ hospital.name }} ({{ hospital.kind }})
{% if banner %}
  {{ banner }}
{% endif %}
{% for field in fields -%}
  [{{ field.position }}] {{ field.label }}  {{ field.hint }}
      {{ field.display }}
{% if field.error %}      ! {{ field.error }}
{% endif -%}
{% endfor %}
{% if results %}{% include "results.txt" %}{% else %}{% include "preview.txt" %}{% endif %}
"#;

pub(crate) const PREVIEW: &str = r#"  ── Results Preview ──
  Fill out the form with `set <field> <value>` and run `submit` to see your
  data summary and visualization.
"#;

pub(crate) const RESULTS: &str = r#"  ── Data Summary {{ results.icon }} ──
  Hospital: {{ results.hospital }}
  Submitted: {{ results.submitted_at }}

{% for item in results.summary -%}
    {{ item.label }} {{ item.value }}
{% endfor %}
  ── Occupancy Visualization ──
    {{ results.gauge.meter }} {{ results.gauge.value }}
    {{ results.gauge.label }}

  Key Metrics Comparison
{% for bar in results.bars -%}
    {{ bar.label }} {{ bar.strip }} {{ bar.value }}
{% endfor %}
  `new` starts a new entry for the same hospital; `reset` changes hospital.
"#;
